//! Serve command implementation
//!
//! Runs the MCP server on stdio, or writes the translation file and exits.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::cli::Output;
use crate::config::GhsearchConfig;
use crate::mcp::{McpServer, tools};
use crate::search::client::GitHubClient;
use crate::translations::TranslationHelper;

#[derive(Args)]
pub struct ServeArgs {
    /// Write every translatable tool text to the translation file and exit
    #[arg(long)]
    pub export_translations: bool,
}

pub async fn execute(args: ServeArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let settings = GhsearchConfig::load_with_custom_config(custom_config)?
        .settings()
        .context("invalid configuration")?;
    settings.validate()?;

    let translations = TranslationHelper::from_settings(&settings.translations);
    let tool_definitions = tools::get_available_tools(&translations, &settings.search);

    if args.export_translations {
        translations.dump()?;
        output.success(&format!(
            "Exported {} translation keys to {}",
            translations.resolved().count(),
            translations.file().display()
        ));
        return Ok(());
    }

    let client = GitHubClient::new(&settings.github).context("failed to create GitHub client")?;

    let server = McpServer::new(client, tool_definitions, settings.search);
    info!(
        api_url = %settings.github.api_url,
        tools = server.tools().len(),
        "starting ghsearch MCP server"
    );
    server.serve_stdio().await
}
