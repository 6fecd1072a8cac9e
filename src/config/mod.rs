//! Configuration management for ghsearch
//!
//! Settings are layered with figment: the embedded `default-config.toml`,
//! then the user config (`~/.config/ghsearch/config.*`), then the repository
//! config (`./ghsearch.*`), then `GHSEARCH_*` environment variables. A file
//! passed with `--config` replaces the user and repository layers.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub mod core;
pub mod smart_load;

pub use self::core::GhsearchConfig;

/// Largest page GitHub's search API will return
pub const GITHUB_MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub github: GithubSettings,
    pub search: SearchSettings,
    pub translations: TranslationSettings,
}

/// Remote API connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubSettings {
    pub api_url: String,

    /// Name of the environment variable holding the access token
    pub token_env: String,

    pub user_agent: String,

    pub timeout_secs: u64,
}

/// Pagination limits applied to every search tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// JSON file of text overrides, also the target of `--export-translations`
    pub file: String,

    pub env_prefix: String,
}

impl Settings {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let github = &self.github;
        if !(github.api_url.starts_with("http://") || github.api_url.starts_with("https://")) {
            bail!("github.api_url must be an http(s) URL, got '{}'", github.api_url);
        }
        if github.token_env.trim().is_empty() {
            bail!("github.token_env cannot be empty");
        }
        if github.user_agent.trim().is_empty() {
            bail!("github.user_agent cannot be empty");
        }
        if github.timeout_secs == 0 {
            bail!("github.timeout_secs cannot be 0");
        }

        let search = &self.search;
        if !(1..=GITHUB_MAX_PER_PAGE).contains(&search.max_per_page) {
            bail!(
                "search.max_per_page must be between 1 and {GITHUB_MAX_PER_PAGE}, got {}",
                search.max_per_page
            );
        }
        if !(1..=search.max_per_page).contains(&search.default_per_page) {
            bail!(
                "search.default_per_page must be between 1 and search.max_per_page ({}), got {}",
                search.max_per_page,
                search.default_per_page
            );
        }

        if self.translations.file.trim().is_empty() {
            bail!("translations.file cannot be empty");
        }
        if self.translations.env_prefix.is_empty() {
            bail!("translations.env_prefix cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
