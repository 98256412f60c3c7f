pub mod api_types;
pub mod client;
pub mod error;

pub use client::{DEFAULT_HUB_ENDPOINT, HubClient, HubListRequest};
