use serde::Deserialize;

/// Response body of `ig_get_fb_profile_hover.php`.
///
/// Only the fields we read are modeled; everything is optional because the
/// provider omits blocks freely depending on profile visibility.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileHoverResponse {
    #[serde(default)]
    pub user_data: Option<UserData>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserData {
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
}
