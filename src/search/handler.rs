//! Search request handling
//!
//! Turns `tools/call` arguments into a GitHub search: the query is rewritten
//! to carry the default `is:` / `repo:` / `type:` filters the caller left
//! out, sent through a [`SearchClient`], and the outcome is wrapped into a
//! tool result.

use std::fmt;
use tracing::{debug, error};

use super::client::{ApiError, SearchClient, SearchOptions, SearchResult};
use super::filters::{has_repo_filter, has_specific_filter, has_type_filter};
use super::params::{
    Arguments, ParamError, optional_pagination_params, optional_param, required_param,
};
use crate::config::SearchSettings;
use crate::mcp::types::McpToolCallResult;
use crate::mcp::utils::{tool_result_error, tool_result_error_from_err, tool_result_json};

/// Which kind of issue search is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Issue,
    PullRequest,
}

impl SearchKind {
    /// Value of the `is:` filter selecting this kind
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Issue => "issue",
            SearchKind::PullRequest => "pr",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Add the `is:` filter for `kind` and, when both `owner` and `repo` are
/// given, a `repo:` filter; filters already in the query are left alone.
pub fn prepare_query(query: &str, kind: SearchKind, owner: &str, repo: &str) -> String {
    let mut query = query.to_string();

    if !has_specific_filter(&query, "is", kind.as_str()) {
        query = format!("is:{kind} {query}");
    }

    if !owner.is_empty() && !repo.is_empty() && !has_repo_filter(&query) {
        query = format!("repo:{owner}/{repo} {query}");
    }

    query
}

/// Restrict a user search to users unless the query already picks a `type:`
pub fn prepare_user_query(query: &str) -> String {
    if has_type_filter(query) {
        query.to_string()
    } else {
        format!("type:user {query}")
    }
}

struct SearchRequest {
    query: String,
    owner: String,
    repo: String,
    options: SearchOptions,
}

impl SearchRequest {
    fn from_args(args: &Arguments, limits: &SearchSettings) -> Result<Self, ParamError> {
        let query: String = required_param(args, "query")?;
        let owner: String = optional_param(args, "owner")?;
        let repo: String = optional_param(args, "repo")?;
        let sort: String = optional_param(args, "sort")?;
        let order: String = optional_param(args, "order")?;
        let pagination =
            optional_pagination_params(args, limits.default_per_page, limits.max_per_page)?;

        Ok(Self {
            query,
            owner,
            repo,
            options: SearchOptions {
                sort: Some(sort).filter(|s| !s.is_empty()),
                order: Some(order).filter(|o| !o.is_empty()),
                page: pagination.page,
                per_page: pagination.per_page,
            },
        })
    }
}

/// Run an issue or pull request search
pub async fn search_handler<C: SearchClient + ?Sized>(
    client: &C,
    args: &Arguments,
    kind: SearchKind,
    error_prefix: &str,
    limits: &SearchSettings,
) -> McpToolCallResult {
    let request = match SearchRequest::from_args(args, limits) {
        Ok(request) => request,
        Err(err) => return tool_result_error(err.to_string()),
    };

    let query = prepare_query(&request.query, kind, &request.owner, &request.repo);
    debug!(%kind, original = %request.query, rewritten = %query, "prepared search query");

    let result = client.search_issues(&query, &request.options).await;
    finish(result, error_prefix)
}

/// Run a user search
pub async fn search_users_handler<C: SearchClient + ?Sized>(
    client: &C,
    args: &Arguments,
    error_prefix: &str,
    limits: &SearchSettings,
) -> McpToolCallResult {
    let request = match SearchRequest::from_args(args, limits) {
        Ok(request) => request,
        Err(err) => return tool_result_error(err.to_string()),
    };

    let query = prepare_user_query(&request.query);
    debug!(original = %request.query, rewritten = %query, "prepared user search query");

    let result = client.search_users(&query, &request.options).await;
    finish(result, error_prefix)
}

fn finish(result: Result<SearchResult, ApiError>, error_prefix: &str) -> McpToolCallResult {
    match result {
        Ok(found) => match tool_result_json(&found) {
            Ok(result) => result,
            Err(err) => tool_result_error_from_err(error_prefix, err),
        },
        Err(ApiError::Status { status, body }) => {
            error!(status, "{error_prefix}");
            tool_result_error(format!("{error_prefix}: unexpected status {status}: {body}"))
        }
        Err(err) => {
            error!(error = %err, "{error_prefix}");
            tool_result_error_from_err(error_prefix, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Records every call and answers with a canned outcome
    #[derive(Default)]
    struct FakeClient {
        calls: Mutex<Vec<(String, SearchOptions)>>,
        status: Option<(u16, String)>,
    }

    impl FakeClient {
        fn failing(status: u16, body: &str) -> Self {
            Self {
                status: Some((status, body.to_string())),
                ..Self::default()
            }
        }

        fn respond(&self, query: &str, options: &SearchOptions) -> Result<SearchResult, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), options.clone()));
            match &self.status {
                Some((status, body)) => Err(ApiError::Status {
                    status: *status,
                    body: body.clone(),
                }),
                None => Ok(SearchResult {
                    total_count: 1,
                    incomplete_results: false,
                    items: vec![json!({"number": 42})],
                }),
            }
        }

        fn last_call(&self) -> (String, SearchOptions) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl SearchClient for FakeClient {
        async fn search_issues(
            &self,
            query: &str,
            options: &SearchOptions,
        ) -> Result<SearchResult, ApiError> {
            self.respond(query, options)
        }

        async fn search_users(
            &self,
            query: &str,
            options: &SearchOptions,
        ) -> Result<SearchResult, ApiError> {
            self.respond(query, options)
        }
    }

    fn args(value: Value) -> Arguments {
        value.as_object().cloned().unwrap()
    }

    fn limits() -> SearchSettings {
        SearchSettings {
            default_per_page: 30,
            max_per_page: 100,
        }
    }

    #[tokio::test]
    async fn test_search_handler_rewrites_query() {
        let client = FakeClient::default();
        let result = search_handler(
            &client,
            &args(json!({"query": "bug", "owner": "octo", "repo": "hello", "sort": "created", "page": 2})),
            SearchKind::Issue,
            "failed to search issues",
            &limits(),
        )
        .await;

        assert!(!result.is_error);
        let (query, options) = client.last_call();
        assert_eq!(query, "repo:octo/hello is:issue bug");
        assert_eq!(options.sort.as_deref(), Some("created"));
        assert_eq!(options.order, None);
        assert_eq!(options.page, 2);
        assert_eq!(options.per_page, 30);

        let body: Value = serde_json::from_str(&result.text()).unwrap();
        assert_eq!(body["total_count"], 1);
        assert_eq!(body["items"][0]["number"], 42);
    }

    #[tokio::test]
    async fn test_search_handler_keeps_explicit_filters() {
        let client = FakeClient::default();
        search_handler(
            &client,
            &args(json!({"query": "repo:a/b is:pr fix", "owner": "octo", "repo": "hello"})),
            SearchKind::PullRequest,
            "failed to search pull requests",
            &limits(),
        )
        .await;

        assert_eq!(client.last_call().0, "repo:a/b is:pr fix");
    }

    #[tokio::test]
    async fn test_search_handler_reports_bad_arguments() {
        let client = FakeClient::default();

        let result = search_handler(&client, &Arguments::new(), SearchKind::Issue, "x", &limits()).await;
        assert!(result.is_error);
        assert_eq!(result.text(), "missing required parameter: query");

        let result = search_handler(
            &client,
            &args(json!({"query": "bug", "perPage": 500})),
            SearchKind::Issue,
            "x",
            &limits(),
        )
        .await;
        assert!(result.is_error);
        assert_eq!(result.text(), "parameter perPage must be between 1 and 100");

        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_handler_reports_api_status() {
        let client = FakeClient::failing(422, r#"{"message":"Validation Failed"}"#);
        let result = search_handler(
            &client,
            &args(json!({"query": "bug"})),
            SearchKind::Issue,
            "failed to search issues",
            &limits(),
        )
        .await;

        assert!(result.is_error);
        assert_eq!(
            result.text(),
            r#"failed to search issues: unexpected status 422: {"message":"Validation Failed"}"#
        );
    }

    #[tokio::test]
    async fn test_search_users_handler() {
        let client = FakeClient::default();
        let result = search_users_handler(
            &client,
            &args(json!({"query": "location:seattle", "perPage": 10})),
            "failed to search users",
            &limits(),
        )
        .await;

        assert!(!result.is_error);
        let (query, options) = client.last_call();
        assert_eq!(query, "type:user location:seattle");
        assert_eq!(options.per_page, 10);
    }
}
