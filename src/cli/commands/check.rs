//! Check command implementation
//!
//! Reports whether a query already carries a filter, optionally with a
//! specific value.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::json;

use crate::cli::Output;
use crate::search::filters::{has_filter, has_specific_filter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Search query to inspect
    pub query: String,

    /// Filter key, e.g. `is`, `repo`, `type`
    #[arg(short, long)]
    pub filter: String,

    /// Require this exact value, e.g. `pr` for `is:pr`
    #[arg(long)]
    pub value: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn execute(args: CheckArgs, output: &Output) -> Result<()> {
    let found = match &args.value {
        Some(value) => has_specific_filter(&args.query, &args.filter, value),
        None => has_filter(&args.query, &args.filter),
    };

    let filter = match &args.value {
        Some(value) => format!("{}:{}", args.filter, value),
        None => format!("{}:", args.filter),
    };

    match args.format {
        OutputFormat::Json => {
            let report = json!({
                "query": args.query,
                "filter": args.filter,
                "value": args.value,
                "found": found,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if found {
                output.status_indicator("FOUND", &filter, true);
            } else {
                output.status_indicator("MISSING", &filter, false);
            }
            output.verbose(&format!("query: {}", args.query));
        }
    }

    Ok(())
}
