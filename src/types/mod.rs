//! Core type definitions
//!
//! Records produced by both searches. Backend payloads are mapped into these
//! types at the client boundary; nothing past that point touches raw JSON.

pub mod hub;
pub mod repository;
pub mod search;

pub use hub::*;
pub use repository::*;
pub use search::*;
