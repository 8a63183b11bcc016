//! X (Twitter) follower lookup via the `twitter135` RapidAPI provider.
//!
//! This provider wraps the GraphQL `UserByScreenName` call, so the follower
//! count sits four levels deep (`data.user.result.legacy.followers_count`)
//! and the extraction step distinguishes a missing user wrapper from a
//! missing count.
pub mod client;
pub mod extract;
pub mod types;

pub use client::TwitterApi;
