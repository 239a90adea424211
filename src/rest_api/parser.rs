//! # Query Parameter Parser
//!
//! Parses list pagination parameters. Parsing is lenient: the leading
//! integer of each value is used, unparseable values fall back to the
//! default, and negative values clamp to zero. Unknown keys are ignored.

use std::collections::HashMap;

use crate::store::leading_integer;

/// Default limit if not specified
pub const DEFAULT_LIMIT: usize = 100;

/// Default offset if not specified
pub const DEFAULT_OFFSET: usize = 0;

/// Parsed list parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Number of records to return
    pub limit: usize,

    /// Number of records to skip
    pub offset: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl ListParams {
    /// Parse query parameters from a HashMap
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            limit: parse_count(params.get("limit"), DEFAULT_LIMIT),
            offset: parse_count(params.get("offset"), DEFAULT_OFFSET),
        }
    }
}

fn parse_count(value: Option<&String>, default: usize) -> usize {
    match value.and_then(|v| leading_integer(v)) {
        Some(n) if n < 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        None => default,
    }
}
