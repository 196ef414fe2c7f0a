//! Commit classification and metadata parsing.
//!
//! Turns raw commits into parsed commits. Parsing never fails: anything that
//! cannot be decoded yields a non-loop commit titled with its raw subject.

pub mod metadata;
pub mod sensors;
pub mod subject;

use log::debug;

use crate::domain::{ParsedCommit, RawCommit};

pub use metadata::parse_metadata;
pub use sensors::{format_sensors, parse_sensors};
pub use subject::match_subject;

/// Parse the leading decimal digits of `text` (after leading whitespace).
pub fn leading_number(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Parse an optionally signed leading integer of `text` (after leading whitespace).
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Classify one commit and decode its metadata.
pub fn parse_commit(raw: &RawCommit) -> ParsedCommit {
    let subject_match = match_subject(&raw.subject);
    let metadata = parse_metadata(&raw.body);
    let is_ai_loop = subject_match.is_some() && metadata.is_some();

    if subject_match.is_some() != metadata.is_some() {
        debug!(
            "Commit {} has {} but not {}",
            raw.short_hash,
            if subject_match.is_some() { "loop subject" } else { "loop metadata" },
            if subject_match.is_some() { "loop metadata" } else { "loop subject" },
        );
    }

    let title = subject_match
        .map(|m| m.title.to_string())
        .unwrap_or_else(|| raw.subject.clone());

    ParsedCommit {
        hash: raw.hash.clone(),
        short_hash: raw.short_hash.clone(),
        date: raw.date.clone(),
        subject: raw.subject.clone(),
        body: raw.body.trim().to_string(),
        metadata,
        is_ai_loop,
        title,
    }
}

/// Parse commits, preserving order.
pub fn parse_commits(raw: &[RawCommit]) -> Vec<ParsedCommit> {
    raw.iter().map(parse_commit).collect()
}
