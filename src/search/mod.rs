//! GitHub search support
//!
//! Query filter detection, tool argument extraction, the search handlers and
//! the client for the remote search API.

pub mod client;
pub mod filters;
pub mod handler;
pub mod params;


pub use client::{ApiError, GitHubClient, SearchClient, SearchOptions, SearchResult};
pub use filters::{has_filter, has_repo_filter, has_specific_filter, has_type_filter};
pub use handler::{SearchKind, prepare_query, prepare_user_query};
