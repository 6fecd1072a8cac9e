//! Model Context Protocol (MCP) server implementation
//!
//! This module provides the MCP server that exposes the GitHub search tools.
//! It speaks JSON-RPC 2.0 over stdio, one message per line.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::SearchSettings;
use crate::search::client::SearchClient;

pub mod tools;
pub mod types;
pub mod utils;

use types::*;
use utils::*;

/// MCP server state
pub struct McpServer<C> {
    client: C,
    tools: Vec<McpToolDefinition>,
    search: SearchSettings,
}

impl<C: SearchClient> McpServer<C> {
    /// Create a new MCP server serving `tools` through `client`
    pub fn new(client: C, tools: Vec<McpToolDefinition>, search: SearchSettings) -> Self {
        Self {
            client,
            tools,
            search,
        }
    }

    pub fn tools(&self) -> &[McpToolDefinition] {
        &self.tools
    }

    /// Serve requests from stdin until it is closed
    pub async fn serve_stdio(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Answer every line read from `reader` on `writer`; ends at EOF
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(tools = self.tools.len(), "MCP server listening on stdio");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("failed to read request")? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(&line).await else {
                continue;
            };

            let mut out = serde_json::to_string(&response).context("failed to encode response")?;
            out.push('\n');
            writer
                .write_all(out.as_bytes())
                .await
                .context("failed to write response")?;
            writer.flush().await.context("failed to write response")?;
        }

        info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw JSON-RPC line; notifications produce no response
    pub async fn handle_line(&self, line: &str) -> Option<McpResponseMessage> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Some(create_error_response(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let request = match validate_jsonrpc_request(&value) {
            Ok(request) => request,
            Err(message) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(create_error_response(id, INVALID_REQUEST, message));
            }
        };

        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "notification");
            return None;
        };

        Some(self.handle_request(id, request).await)
    }

    async fn handle_request(&self, id: Value, request: McpRequestMessage) -> McpResponseMessage {
        debug!(method = %request.method, %id, "request");

        match request.method.as_str() {
            "initialize" => create_success_response(id, create_initialize_response()),
            "ping" => create_success_response(id, json!({})),
            "tools/list" => create_success_response(id, create_tool_list_response(&self.tools)),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            method => create_error_response(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            ),
        }
    }

    async fn handle_tools_call(&self, id: Value, params: Option<Value>) -> McpResponseMessage {
        let call: McpToolCallRequest = match params.map(serde_json::from_value::<McpToolCallRequest>) {
            Some(Ok(call)) => call,
            Some(Err(e)) => {
                return create_error_response(id, INVALID_PARAMS, format!("Invalid params: {e}"));
            }
            None => return create_error_response(id, INVALID_PARAMS, "Missing params"),
        };

        let args = call.arguments.unwrap_or_default();
        let result =
            match tools::execute_tool(&call.name, &args, &self.client, &self.search).await {
                Ok(result) => result,
                Err(message) => return create_error_response(id, INVALID_PARAMS, message),
            };

        match serde_json::to_value(&result) {
            Ok(value) => create_success_response(id, value),
            Err(e) => create_error_response(id, INTERNAL_ERROR, format!("Internal error: {e}")),
        }
    }
}
