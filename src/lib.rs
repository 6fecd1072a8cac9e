//! # ghsearch - GitHub search over MCP
//!
//! Serves GitHub issue, pull request and user search as Model Context
//! Protocol tools on stdio. Before a query is sent, it is completed with the
//! `is:`, `repo:` and `type:` filters the caller left out; detecting those
//! filters is done by a word-boundary aware scanner in [`search::filters`].
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_PERSONAL_ACCESS_TOKEN=...
//! ghsearch serve
//!
//! # inspect how a query would be rewritten
//! ghsearch rewrite "memory leak" --kind pr --owner rust-lang --repo rust
//! ```

pub mod cli;
pub mod config;
pub mod mcp;
pub mod search;
pub mod translations;

pub use cli::{Cli, Output};
pub use config::GhsearchConfig;

/// Result type alias for ghsearch operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
