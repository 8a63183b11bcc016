//! Provider adapters and the follower-count aggregator.
//!
//! One submodule per platform (Instagram, LinkedIn, X/Twitter), each holding
//! the HTTP client wrapper, strongly typed response models, and the JSON
//! extraction step for that provider. The parsing contract of each provider
//! (header names, query parameter names, response paths) is private to its
//! module and never leaks into [`hub::SocialHub`], which only sees the
//! normalized [`tally_common::FollowerResult`].
pub mod hub;
pub mod instagram;
pub mod linkedin;
pub mod twitter;

pub use hub::SocialHub;
