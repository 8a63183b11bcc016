//! Instagram follower lookup via the `instagram-scraper-stable-api` RapidAPI
//! provider.
//!
//! Submodules provide the HTTP client wrapper, JSON extraction helper, and
//! typed response models. The provider's parameter name (`username_or_url`)
//! and response path (`user_data.follower_count`) are private to this module.
pub mod client;
pub mod extract;
pub mod types;

pub use client::InstagramApi;
