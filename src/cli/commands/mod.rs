//! Command implementations for the ghsearch CLI
//!
//! Each command is organized into its own module with its own `Args`.

pub mod check;
pub mod config;
pub mod rewrite;
pub mod serve;
pub mod version;
