use anyhow::{Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;
use tracing::debug;

use super::Settings;
use super::smart_load;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "GHSEARCH_";

pub struct GhsearchConfig {
    figment: Figment,
}

impl GhsearchConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // A custom config replaces the user and repo layers
        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                bail!("Config file not found: {custom_path}");
            }
            debug!(path = custom_path, "loading custom config");
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user = Self::user_config_base();
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(format!("{user}.toml")))
                .merge(Json::file(format!("{user}.json")))
                .merge(Yaml::file(format!("{user}.yaml")))
                .merge(Yaml::file(format!("{user}.yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("ghsearch.toml"))
                .merge(Json::file("ghsearch.json"))
                .merge(Yaml::file("ghsearch.yaml"))
                .merge(Yaml::file("ghsearch.yml"));
        }

        // Environment variables always have highest priority, minus the translation overrides
        let text_prefix = Self::translation_env_prefix(&figment);
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(move |key| {
                    text_prefix
                        .as_deref()
                        .is_none_or(|prefix| !key.as_str().to_ascii_lowercase().starts_with(prefix))
                })
                .split("__"),
        );

        Ok(GhsearchConfig { figment })
    }

    /// Typed view of the merged configuration
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.figment.extract()?)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.figment.extract_inner(path)?)
    }

    pub fn get_u32(&self, path: &str) -> Result<u32> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// `translations.env_prefix` relative to `GHSEARCH_`, lower-cased, when it nests under it
    ///
    /// Read from the file layers only; an env override of the prefix itself is not considered.
    fn translation_env_prefix(figment: &Figment) -> Option<String> {
        let prefix = figment
            .extract_inner::<String>("translations.env_prefix")
            .ok()?
            .to_ascii_lowercase();

        prefix
            .strip_prefix(&ENV_PREFIX.to_ascii_lowercase())
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }

    fn user_config_base() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/ghsearch/config"),
            Err(_) => "~/.config/ghsearch/config".to_string(),
        }
    }
}
