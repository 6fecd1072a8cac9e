//! Command-line interface for ghsearch
//!
//! This module provides the main CLI structure and command handling. It uses
//! clap for argument parsing; every subcommand owns its `Args` struct.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

use commands::{check, config, rewrite, serve, version};

/// ghsearch - GitHub search MCP server
#[derive(Parser)]
#[command(
    name = "ghsearch",
    version = env!("CARGO_PKG_VERSION"),
    about = "GitHub search MCP server with word-boundary aware query filters",
    long_about = "ghsearch serves GitHub issue, pull request and user search as MCP tools over stdio. \
                  Queries are completed with the is:, repo: and type: filters the caller left out."
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve(serve::ServeArgs),
    /// Check whether a query contains a filter
    Check(check::CheckArgs),
    /// Print the query a search tool would send
    Rewrite(rewrite::RewriteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let custom_config = self.config.as_deref();

        match self.command {
            Some(Commands::Serve(args)) => serve::execute(args, custom_config, &output).await,
            Some(Commands::Check(args)) => check::execute(args, &output).await,
            Some(Commands::Rewrite(args)) => rewrite::execute(args).await,
            Some(Commands::Config(args)) => config::execute(args, custom_config, &output).await,
            Some(Commands::Version(args)) => version::execute(args, &output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Install the stderr subscriber; stdout carries MCP traffic
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,hyper=info,reqwest=info"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // A subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["ghsearch", "-vv", "--config", "x.toml", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert!(matches!(cli.command, Some(Commands::Version(_))));

        let cli = Cli::try_parse_from(["ghsearch", "check", "is:pr fix", "--filter", "is", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
