use crate::errors::{error_codes, CoreError};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Meta keys excluded from filter criteria when no override is given.
pub const PAGINATION_PARAMS: [&str; 3] = ["limit", "skip", "count"];

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 50;

/// Result windowing descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginate {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Paginate {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Sanitizes a caller-supplied filter mapping for a document query engine.
///
/// Entries are dropped when the value is null or a non-finite number, or
/// when the key is in the exclusion set (defaults to
/// [`PAGINATION_PARAMS`]). Fields named in `regex_fields` have their
/// scalar value replaced with a case-insensitive, unanchored pattern
/// descriptor; the caller's text is escaped, so it always matches as a
/// literal substring. No field is ever added that was not in the input.
pub fn normalise_filter(
    filter: &Map<String, Value>,
    regex_fields: &[&str],
    exclude_fields: Option<&[&str]>,
) -> Result<Map<String, Value>, CoreError> {
    let exclude: &[&str] = match exclude_fields {
        Some(fields) if !fields.is_empty() => fields,
        _ => &PAGINATION_PARAMS,
    };

    let mut normalised = Map::new();
    for (field, value) in filter {
        if exclude.contains(&field.as_str()) || is_discarded(value) {
            log::trace!("dropping filter field '{}'", field);
            continue;
        }

        if regex_fields.contains(&field.as_str()) {
            normalised.insert(field.clone(), pattern_descriptor(field, value)?);
        } else {
            normalised.insert(field.clone(), value.clone());
        }
    }

    Ok(normalised)
}

fn is_discarded(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(n) => n.as_f64().map(|f| !f.is_finite()).unwrap_or(false),
        _ => false,
    }
}

/// Builds the engine-native pattern operator for a regex-designated field.
/// Only scalar values can be promoted; anything else is bad client input
/// and fails synchronously.
fn pattern_descriptor(field: &str, value: &Value) -> Result<Value, CoreError> {
    let literal = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            return Err(CoreError::Pattern {
                code: error_codes::NON_SCALAR_PATTERN.to_string(),
                message: format!("Field '{}' cannot be promoted to a pattern criterion", field),
            })
        }
    };

    let pattern = regex::escape(&literal);
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| CoreError::Pattern {
            code: error_codes::INVALID_PATTERN.to_string(),
            message: format!("Invalid pattern for field '{}': {}", field, e),
        })?;

    Ok(json!({ "$regex": pattern, "$options": "i" }))
}

/// Extracts pagination from a raw filter mapping.
///
/// Always-defaulting policy: absent, falsy (including zero, however
/// spelled), negative, or unparseable values fall back to skip 0 /
/// limit 50. Parse failure is leniency, not an error; callers rely on
/// this.
pub fn normalise_paginate(filter: &Map<String, Value>) -> Paginate {
    Paginate {
        skip: page_param(filter.get("skip"), DEFAULT_SKIP),
        limit: page_param(filter.get("limit"), DEFAULT_LIMIT),
    }
}

fn page_param(value: Option<&Value>, default: u64) -> u64 {
    let parsed = match value {
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(default),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
        _ => default,
    };
    // A value that parses to zero is falsy, not an explicit window.
    if parsed == 0 {
        default
    } else {
        parsed
    }
}
