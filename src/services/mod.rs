pub mod hub_search;
pub mod repository_search;

pub use hub_search::{HubSearchOptions, HubSearchService};
pub use repository_search::RepositorySearchService;
