//! Sensor list parsing.
//!
//! Format: `verify: pass (trivial), coverage: fail (no jacoco), lint: fail`.
//! A comma separates entries only when followed by whitespace and a bare
//! `word:` token, so commas inside parenthesised details survive. This is a
//! heuristic; segments that do not decode become `unknown` sensors.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Sensor, SensorStatus};

static SENSOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_-]*):\s*(pass|fail|partial|pending)(?:\s*\((.+)\))?$").unwrap()
});

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// If the comma at `comma` separates two entries, return where the next entry starts.
fn separator_end(value: &str, comma: usize) -> Option<usize> {
    let rest = &value[comma + 1..];
    let ws_len: usize = rest
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    if ws_len == 0 {
        return None;
    }

    let after_ws = &rest[ws_len..];
    let word_len = after_ws.chars().take_while(|c| is_word_char(*c)).count();
    if word_len == 0 || after_ws[word_len..].chars().next() != Some(':') {
        return None;
    }

    Some(comma + 1 + ws_len)
}

/// Split a sensors value into entry segments.
pub fn split_segments(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (idx, c) in value.char_indices() {
        if c != ',' || idx < start {
            continue;
        }
        if let Some(next) = separator_end(value, idx) {
            segments.push(&value[start..idx]);
            start = next;
        }
    }
    segments.push(&value[start..]);
    segments
}

/// Decode one `name: status (details)` segment.
pub fn parse_sensor(segment: &str) -> Sensor {
    match SENSOR_PATTERN.captures(segment) {
        Some(caps) => {
            let status = SensorStatus::from_word(&caps[2]).unwrap_or(SensorStatus::Unknown);
            Sensor {
                name: caps[1].to_string(),
                status,
                details: caps.get(3).map(|m| m.as_str().to_string()),
            }
        }
        None => Sensor::unknown(segment),
    }
}

/// Parse a full sensors value. Every segment yields exactly one sensor.
pub fn parse_sensors(value: &str) -> Vec<Sensor> {
    split_segments(value).into_iter().map(parse_sensor).collect()
}

/// Render sensors back into the `name: status (details)` list form.
pub fn format_sensors(sensors: &[Sensor]) -> String {
    sensors
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
