//! MCP utility functions
//!
//! Builders for JSON-RPC envelopes and for the tool results handed back to
//! the client. Tool failures are reported as results with `isError` set, not
//! as JSON-RPC errors.

use crate::mcp::types::*;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;

/// Wrap a message in a successful text result
pub fn tool_result_text(message: impl Into<String>) -> McpToolCallResult {
    McpToolCallResult {
        content: vec![McpContent::Text {
            text: message.into(),
        }],
        is_error: false,
    }
}

/// Wrap a message in an error result
pub fn tool_result_error(message: impl Into<String>) -> McpToolCallResult {
    McpToolCallResult {
        content: vec![McpContent::Text {
            text: message.into(),
        }],
        is_error: true,
    }
}

/// Error result reading `"{message}: {err}"`
pub fn tool_result_error_from_err(message: &str, err: impl Display) -> McpToolCallResult {
    tool_result_error(format!("{message}: {err}"))
}

/// Text result with an embedded resource
pub fn tool_result_resource(
    message: impl Into<String>,
    contents: McpResourceContents,
) -> McpToolCallResult {
    McpToolCallResult {
        content: vec![
            McpContent::Text {
                text: message.into(),
            },
            McpContent::Resource { resource: contents },
        ],
        is_error: false,
    }
}

/// Serialize `value` into a text result
pub fn tool_result_json<T: Serialize + ?Sized>(value: &T) -> Result<McpToolCallResult> {
    let data = serde_json::to_string(value).context("failed to marshal response")?;
    Ok(tool_result_text(data))
}

/// Create a successful MCP response
pub fn create_success_response(id: Value, result: Value) -> McpResponseMessage {
    McpResponseMessage {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        result: Some(result),
        error: None,
    }
}

/// Create an error MCP response
pub fn create_error_response(id: Value, code: i32, message: impl Into<String>) -> McpResponseMessage {
    McpResponseMessage {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        result: None,
        error: Some(McpErrorResponse {
            code,
            message: message.into(),
            data: None,
        }),
    }
}

/// Validate a JSON-RPC request and decode it
pub fn validate_jsonrpc_request(request: &Value) -> Result<McpRequestMessage, String> {
    let Some(obj) = request.as_object() else {
        return Err("Request must be an object".to_string());
    };

    match obj.get("jsonrpc") {
        Some(version) if version == JSONRPC_VERSION => {}
        Some(_) => return Err("Invalid JSON-RPC version".to_string()),
        None => return Err("Missing jsonrpc field".to_string()),
    }

    match obj.get("method") {
        Some(method) if method.is_string() => {}
        Some(_) => return Err("Method must be a string".to_string()),
        None => return Err("Missing method field".to_string()),
    }

    serde_json::from_value(request.clone()).map_err(|e| format!("Invalid request: {e}"))
}

/// Create tool list response
pub fn create_tool_list_response(tools: &[McpToolDefinition]) -> Value {
    json!({
        "tools": tools
    })
}

/// Create initialize response
pub fn create_initialize_response() -> Value {
    json!({
        "protocolVersion": MCP_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": crate::PKG_NAME,
            "version": crate::VERSION
        }
    })
}
