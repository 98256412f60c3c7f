/// Text renderers for repository and Hub search results
pub mod formatter;

/// GitHub API client, credential discovery and wire types
pub mod github;

/// Hugging Face Hub API client and wire types
pub mod huggingface;

/// Search services applying the recoverable-failure policy on top of the clients
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
