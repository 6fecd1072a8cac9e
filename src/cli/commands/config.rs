use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::GhsearchConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration as JSON
    Show {
        /// Only show this section or key, e.g. `github` or `search.max_per_page`
        section: Option<String>,
    },
    /// Validate the merged configuration
    Validate,
}

pub async fn execute(args: ConfigArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = GhsearchConfig::load_with_custom_config(custom_config)?;

    match args.command {
        ConfigCommand::Show { section } => {
            let value = match &section {
                Some(key) => config
                    .get_section(key)
                    .with_context(|| format!("Configuration key '{key}' not found"))?,
                None => config.get_full_config()?,
            };

            match value {
                serde_json::Value::String(s) => println!("{s}"),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    println!("{}", serde_json::to_string_pretty(&value)?)
                }
                other => println!("{other}"),
            }
        }
        ConfigCommand::Validate => {
            let settings = config.settings().context("invalid configuration")?;
            settings.validate()?;

            output.success("Configuration is valid");
            output.category("Summary");
            output.key_value("API URL:", &settings.github.api_url, true);
            output.key_value("Token variable:", &settings.github.token_env, false);
            output.key_value(
                "Page size:",
                &format!(
                    "{} (max {})",
                    settings.search.default_per_page, settings.search.max_per_page
                ),
                false,
            );
            output.key_value("Translations:", &settings.translations.file, false);
        }
    }

    Ok(())
}
