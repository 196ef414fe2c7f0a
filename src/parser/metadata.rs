//! Body metadata extraction.
//!
//! A body line is a field iff it looks like `[key] value`. Other lines are
//! commentary and are skipped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::leading_integer;
use super::sensors::parse_sensors;
use crate::domain::CommitMetadata;

static FIELD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([A-Za-z0-9_][A-Za-z0-9_-]*)\]\s*(.+)$").unwrap());

pub const NODE_PATH: &str = "node-path";
pub const LEVEL: &str = "level";
pub const ITERATION: &str = "iteration";
pub const STATUS: &str = "status";
pub const TARGET_MET: &str = "target-met";
pub const SENSORS: &str = "sensors";
pub const ACTION: &str = "action";

/// Sentinel for free-text fields the commit did not provide
pub const UNKNOWN: &str = "unknown";

/// Collect `[key] value` fields. A repeated key keeps its last value.
pub fn parse_fields(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in body.trim().lines() {
        if let Some(caps) = FIELD_PATTERN.captures(line) {
            fields.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
    }
    fields
}

fn field<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Decode loop metadata from a commit body.
///
/// Returns `None` unless both `node-path` and `iteration` are present.
pub fn parse_metadata(body: &str) -> Option<CommitMetadata> {
    let fields = parse_fields(body);

    let node_path = field(&fields, NODE_PATH)?;
    let iteration = field(&fields, ITERATION)?;

    let level = field(&fields, LEVEL).and_then(leading_integer).unwrap_or(0);

    Some(CommitMetadata {
        node_path: node_path.to_string(),
        level,
        iteration: iteration.to_string(),
        status: field(&fields, STATUS).unwrap_or(UNKNOWN).to_string(),
        target_met: field(&fields, TARGET_MET).unwrap_or(UNKNOWN).to_string(),
        sensors: field(&fields, SENSORS).map(parse_sensors).unwrap_or_default(),
        action: field(&fields, ACTION).unwrap_or_default().to_string(),
    })
}
