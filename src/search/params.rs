//! Tool argument extraction
//!
//! MCP tool arguments arrive as a loose JSON object. These helpers pull typed
//! values out of it and report missing or mistyped parameters in a form that
//! can be handed straight back to the caller.

use serde_json::{Map, Value};
use thiserror::Error;

/// Arguments of a `tools/call` request
pub type Arguments = Map<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing required parameter: {0}")]
    Missing(String),

    #[error("parameter {name} is not of type {expected}, is {actual}")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("parameter {name} {detail}")]
    OutOfRange { name: String, detail: String },
}

/// A value type that can be read from a JSON argument.
pub trait ParamValue: Sized + Default + PartialEq {
    const TYPE_NAME: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

impl ParamValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl ParamValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ParamValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    // JSON clients often send integers as floats (`2.0`)
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }
}

/// Page selection for search requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

/// Get a parameter that must be present and non-empty.
///
/// The zero value of the type (empty string, `0`, `false`) counts as missing.
pub fn required_param<T: ParamValue>(args: &Arguments, name: &str) -> Result<T, ParamError> {
    let value = args
        .get(name)
        .ok_or_else(|| ParamError::Missing(name.to_string()))?;

    let parsed = T::from_json(value).ok_or_else(|| wrong_type::<T>(name, value))?;
    if parsed == T::default() {
        return Err(ParamError::Missing(name.to_string()));
    }

    Ok(parsed)
}

/// Get a parameter that may be absent; absent and `null` give the default.
pub fn optional_param<T: ParamValue>(args: &Arguments, name: &str) -> Result<T, ParamError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::from_json(value).ok_or_else(|| wrong_type::<T>(name, value)),
    }
}

/// Get an integer parameter, using `default` when it is absent or zero.
pub fn optional_int_param_with_default(
    args: &Arguments,
    name: &str,
    default: i64,
) -> Result<i64, ParamError> {
    let value: i64 = optional_param(args, name)?;
    Ok(if value == 0 { default } else { value })
}

/// Read `page` and `perPage`.
pub fn optional_pagination_params(
    args: &Arguments,
    default_per_page: u32,
    max_per_page: u32,
) -> Result<Pagination, ParamError> {
    let page = optional_int_param_with_default(args, "page", 1)?;
    let per_page = optional_int_param_with_default(args, "perPage", i64::from(default_per_page))?;

    let page = u32::try_from(page)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| ParamError::OutOfRange {
            name: "page".to_string(),
            detail: "must be at least 1".to_string(),
        })?;

    let per_page = u32::try_from(per_page)
        .ok()
        .filter(|p| (1..=max_per_page).contains(p))
        .ok_or_else(|| ParamError::OutOfRange {
            name: "perPage".to_string(),
            detail: format!("must be between 1 and {max_per_page}"),
        })?;

    Ok(Pagination { page, per_page })
}

fn wrong_type<T: ParamValue>(name: &str, value: &Value) -> ParamError {
    ParamError::WrongType {
        name: name.to_string(),
        expected: T::TYPE_NAME,
        actual: json_type_name(value),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
