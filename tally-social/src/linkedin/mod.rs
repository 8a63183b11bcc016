//! LinkedIn follower lookup via the `linkedinscraper` RapidAPI provider.
pub mod client;
pub mod extract;
pub mod types;

pub use client::LinkedinApi;
