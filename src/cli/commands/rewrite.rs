//! Rewrite command implementation
//!
//! Prints the query a search tool would send for the given arguments.

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};

use crate::search::handler::{SearchKind, prepare_query, prepare_user_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    Issue,
    Pr,
    User,
}

#[derive(Args)]
pub struct RewriteArgs {
    /// Search query as the caller wrote it
    pub query: String,

    /// Which search tool the query is for
    #[arg(short, long, value_enum, default_value_t = QueryKind::Issue)]
    pub kind: QueryKind,

    /// Repository owner; scopes the search together with --repo
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name; scopes the search together with --owner
    #[arg(long)]
    pub repo: Option<String>,
}

pub async fn execute(args: RewriteArgs) -> Result<()> {
    println!("{}", rewrite(&args)?);
    Ok(())
}

fn rewrite(args: &RewriteArgs) -> Result<String> {
    let owner = args.owner.as_deref().unwrap_or_default();
    let repo = args.repo.as_deref().unwrap_or_default();

    let kind = match args.kind {
        QueryKind::Issue => SearchKind::Issue,
        QueryKind::Pr => SearchKind::PullRequest,
        QueryKind::User => {
            if !owner.is_empty() || !repo.is_empty() {
                bail!("--owner and --repo do not apply to user searches");
            }
            return Ok(prepare_user_query(&args.query));
        }
    };

    Ok(prepare_query(&args.query, kind, owner, repo))
}
