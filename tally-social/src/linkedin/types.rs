use serde::Deserialize;

/// Response body of `profile-details`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDetailsResponse {
    #[serde(default)]
    pub data: Option<ProfileData>,
}

/// The provider camelCases its field names.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub connection_count: Option<u64>,
    #[serde(default)]
    pub headline: Option<String>,
}
