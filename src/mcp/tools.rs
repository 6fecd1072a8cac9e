//! MCP tools implementation
//!
//! This module provides the search tools that can be called through the MCP
//! server.

use serde_json::{Value, json};

use crate::config::SearchSettings;
use crate::mcp::types::{McpToolCallResult, McpToolDefinition};
use crate::search::client::SearchClient;
use crate::search::handler::{SearchKind, search_handler, search_users_handler};
use crate::search::params::Arguments;
use crate::translations::TranslationHelper;

pub const SEARCH_ISSUES: &str = "search_issues";
pub const SEARCH_PULL_REQUESTS: &str = "search_pull_requests";
pub const SEARCH_USERS: &str = "search_users";

const ISSUE_SORTS: &[&str] = &[
    "comments",
    "reactions",
    "reactions-+1",
    "reactions--1",
    "reactions-smile",
    "reactions-thinking_face",
    "reactions-heart",
    "reactions-tada",
    "interactions",
    "created",
    "updated",
];

const USER_SORTS: &[&str] = &["followers", "repositories", "joined"];

/// Get all available MCP tools, descriptions resolved through `t`
///
/// The advertised `perPage` bound is the configured `max_per_page`.
pub fn get_available_tools(t: &TranslationHelper, limits: &SearchSettings) -> Vec<McpToolDefinition> {
    vec![
        McpToolDefinition {
            name: SEARCH_ISSUES.to_string(),
            description: t.translate(
                "TOOL_SEARCH_ISSUES_DESCRIPTION",
                "Search for issues in GitHub repositories using issues search syntax already scoped to is:issue",
            ),
            input_schema: issue_search_schema(
                "Search query using GitHub issues search syntax",
                "Optional repository owner. If provided with repo, only issues for this repository are listed.",
                "Optional repository name. If provided with owner, only issues for this repository are listed.",
                limits,
            ),
        },
        McpToolDefinition {
            name: SEARCH_PULL_REQUESTS.to_string(),
            description: t.translate(
                "TOOL_SEARCH_PULL_REQUESTS_DESCRIPTION",
                "Search for pull requests in GitHub repositories using issues search syntax already scoped to is:pr",
            ),
            input_schema: issue_search_schema(
                "Search query using GitHub pull request search syntax",
                "Optional repository owner. If provided with repo, only pull requests for this repository are listed.",
                "Optional repository name. If provided with owner, only pull requests for this repository are listed.",
                limits,
            ),
        },
        McpToolDefinition {
            name: SEARCH_USERS.to_string(),
            description: t.translate(
                "TOOL_SEARCH_USERS_DESCRIPTION",
                "Find GitHub users by username, real name, or other profile information",
            ),
            input_schema: with_pagination(json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "User search query. Examples: 'john smith', 'location:seattle', 'followers:>100'. Search is automatically scoped to type:user."
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort users by number of followers or repositories, or when the person joined GitHub.",
                        "enum": USER_SORTS
                    },
                    "order": order_schema()
                },
                "required": ["query"]
            }), limits),
        },
    ]
}

/// Execute a tool by name
pub async fn execute_tool<C: SearchClient + ?Sized>(
    tool_name: &str,
    args: &Arguments,
    client: &C,
    limits: &SearchSettings,
) -> Result<McpToolCallResult, String> {
    match tool_name {
        SEARCH_ISSUES => Ok(search_handler(
            client,
            args,
            SearchKind::Issue,
            "failed to search issues",
            limits,
        )
        .await),
        SEARCH_PULL_REQUESTS => Ok(search_handler(
            client,
            args,
            SearchKind::PullRequest,
            "failed to search pull requests",
            limits,
        )
        .await),
        SEARCH_USERS => Ok(search_users_handler(client, args, "failed to search users", limits).await),
        _ => Err(format!("Unknown tool: {tool_name}")),
    }
}

fn issue_search_schema(query: &str, owner: &str, repo: &str, limits: &SearchSettings) -> Value {
    with_pagination(json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": query
            },
            "owner": {
                "type": "string",
                "description": owner
            },
            "repo": {
                "type": "string",
                "description": repo
            },
            "sort": {
                "type": "string",
                "description": "Sort field by number of matches of categories, defaults to best match",
                "enum": ISSUE_SORTS
            },
            "order": order_schema()
        },
        "required": ["query"]
    }), limits)
}

fn order_schema() -> Value {
    json!({
        "type": "string",
        "description": "Sort order",
        "enum": ["asc", "desc"]
    })
}

fn with_pagination(mut schema: Value, limits: &SearchSettings) -> Value {
    if let Some(properties) = schema["properties"].as_object_mut() {
        properties.insert(
            "page".to_string(),
            json!({
                "type": "number",
                "description": "Page number for pagination (min 1)",
                "minimum": 1
            }),
        );
        properties.insert(
            "perPage".to_string(),
            json!({
                "type": "number",
                "description": format!("Results per page for pagination (min 1, max {})", limits.max_per_page),
                "minimum": 1,
                "maximum": limits.max_per_page
            }),
        );
    }
    schema
}
