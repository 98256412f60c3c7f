pub mod auth;
pub mod client;
pub mod error;
pub mod graphql;
pub mod rest_types;

pub use client::GitHubClient;
pub use graphql::graphql_types;
