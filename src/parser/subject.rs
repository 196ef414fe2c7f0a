//! Loop subject line grammar.
//!
//! `ai-loop[<node-path>]: iteration <label> <sep> <title>` where `<sep>` is an
//! em-dash, `--` or `-`.

use regex::Regex;
use std::sync::LazyLock;

static SUBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ai-loop\[(.+?)\]:\s*iteration\s+(\S+)\s*(?:—|--|-)\s*(.+)$").unwrap());

/// Pieces captured from a loop subject.
///
/// Node path and label here are informational; the body metadata is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectMatch<'a> {
    pub node_path: &'a str,
    pub iteration: &'a str,
    pub title: &'a str,
}

/// Match a subject against the loop grammar.
pub fn match_subject(subject: &str) -> Option<SubjectMatch<'_>> {
    let caps = SUBJECT_PATTERN.captures(subject)?;
    Some(SubjectMatch {
        node_path: caps.get(1)?.as_str(),
        iteration: caps.get(2)?.as_str(),
        title: caps.get(3)?.as_str(),
    })
}
