//! Commit records and the metadata decoded from loop commit messages

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One commit as read from version control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    pub hash: String,
    pub short_hash: String,
    /// ISO-8601 author date
    pub date: String,
    pub subject: String,
    /// Free-text body, possibly empty or multi-line
    pub body: String,
}

/// Result of one sensor check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Pass,
    Fail,
    Partial,
    Pending,
    /// Segment did not follow the `name: status (details)` form
    Unknown,
}

impl SensorStatus {
    /// Parse one of the four recognized status words
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "pass" => Some(SensorStatus::Pass),
            "fail" => Some(SensorStatus::Fail),
            "partial" => Some(SensorStatus::Partial),
            "pending" => Some(SensorStatus::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Pass => "pass",
            SensorStatus::Fail => "fail",
            SensorStatus::Partial => "partial",
            SensorStatus::Pending => "pending",
            SensorStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named check result attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub status: SensorStatus,
    pub details: Option<String>,
}

impl Sensor {
    pub fn new(name: impl Into<String>, status: SensorStatus) -> Self {
        Self {
            name: name.into(),
            status,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Wrap a segment that could not be decoded
    pub fn unknown(segment: &str) -> Self {
        let segment = segment.trim();
        Self {
            name: segment.to_string(),
            status: SensorStatus::Unknown,
            details: Some(segment.to_string()),
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == SensorStatus::Unknown {
            // Unknown sensors carry their raw segment
            return f.write_str(self.details.as_deref().unwrap_or(&self.name));
        }
        write!(f, "{}: {}", self.name, self.status)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Structured fields decoded from a loop commit's body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMetadata {
    /// Slash-delimited position in the task hierarchy, e.g. `root/child`
    pub node_path: String,
    /// 0 = outer, 1 = inner
    pub level: i64,
    /// Dot-delimited iteration label, e.g. `3.2`
    pub iteration: String,
    pub status: String,
    /// Informal free text, not a boolean
    pub target_met: String,
    pub sensors: Vec<Sensor>,
    pub action: String,
}

impl CommitMetadata {
    /// Last segment of the node path
    pub fn node_name(&self) -> &str {
        self.node_path.rsplit('/').next().unwrap_or(&self.node_path)
    }
}

/// A raw commit plus its loop classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    pub hash: String,
    pub short_hash: String,
    pub date: String,
    pub subject: String,
    pub body: String,
    pub metadata: Option<CommitMetadata>,
    pub is_ai_loop: bool,
    /// Subject text after the loop prefix, or the raw subject
    pub title: String,
}

impl ParsedCommit {
    /// Iteration label from metadata, if any
    pub fn iteration(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.iteration.as_str())
    }

    /// Author date, when it is valid RFC 3339
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }
}
