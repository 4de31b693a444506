pub mod client;
pub mod error;
pub mod query;
pub mod repo_cache;


pub use client::{
    ClientConfig, DEFAULT_API_URL, GitHubClient, MAX_REACHABLE_RESULTS, PAGE_SIZE, SearchBackend,
    SearchPage,
};
pub use error::{GENERIC_FETCH_ERROR, SearchError};
