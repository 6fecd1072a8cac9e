//! Version command implementation

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};
use crate::mcp::types::MCP_VERSION;

#[derive(Args)]
pub struct VersionArgs {
    /// Show detailed version information
    #[arg(long)]
    pub detailed: bool,
}

pub async fn execute(args: VersionArgs, output: &Output) -> Result<()> {
    if !args.detailed {
        println!("{PKG_NAME} {VERSION}");
        return Ok(());
    }

    output.status_indicator("VERSION", &format!("{PKG_NAME} v{VERSION}"), true);

    output.category("About");
    output.key_value("Description:", PKG_DESCRIPTION, false);
    output.key_value("Repository:", env!("CARGO_PKG_REPOSITORY"), false);
    output.key_value("License:", env!("CARGO_PKG_LICENSE"), false);

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("MCP protocol:", MCP_VERSION, false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );
    output.blank_line();

    Ok(())
}
