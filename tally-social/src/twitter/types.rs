use serde::Deserialize;

/// Response body of `v2/UserByScreenName/`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserByScreenNameResponse {
    #[serde(default)]
    pub data: Option<UserData>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserData {
    #[serde(default)]
    pub user: Option<UserWrapper>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserWrapper {
    #[serde(default)]
    pub result: Option<UserResult>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserResult {
    #[serde(default)]
    pub legacy: Option<LegacyProfile>,
    #[serde(default)]
    pub rest_id: Option<String>,
}

/// The pre-GraphQL profile blob; field names follow the old v1.1 API.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LegacyProfile {
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub friends_count: Option<u64>,
    #[serde(default)]
    pub screen_name: Option<String>,
}
