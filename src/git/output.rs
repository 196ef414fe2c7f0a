//! Parsers for the text git prints for `log`, `diff-tree --numstat` and `branch --list`.

use crate::domain::{DiffFileStat, RawCommit};

/// Marks the end of one commit in `git log` output
pub const COMMIT_SEPARATOR: &str = "---COMMIT_SEP---";
/// Separates fields within one commit
pub const FIELD_SEPARATOR: &str = "---FIELD_SEP---";

/// `--format` value producing hash, short hash, ISO author date, subject and body.
pub fn log_format() -> String {
    format!("{}{}", ["%H", "%h", "%aI", "%s", "%b"].join(FIELD_SEPARATOR), COMMIT_SEPARATOR)
}

/// Split `git log --format=<log_format()>` output into raw commits.
pub fn parse_log(stdout: &str) -> Vec<RawCommit> {
    stdout
        .split(COMMIT_SEPARATOR)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let mut parts = chunk.splitn(5, FIELD_SEPARATOR);
            let mut next = || parts.next().unwrap_or_default().to_string();
            RawCommit {
                hash: next(),
                short_hash: next(),
                date: next(),
                subject: next(),
                body: next(),
            }
        })
        .collect()
}

fn count(field: &str) -> u64 {
    // Binary files report "-"
    field.trim().parse().unwrap_or(0)
}

/// Parse `git diff-tree --numstat` lines (`ins<TAB>del<TAB>path`).
pub fn parse_numstat(stdout: &str) -> Vec<DiffFileStat> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.splitn(3, '\t');
            let insertions = count(fields.next()?);
            let deletions = count(fields.next()?);
            let file = fields.next()?.to_string();
            Some(DiffFileStat {
                file,
                insertions,
                deletions,
            })
        })
        .collect()
}

/// Parse `git branch --format=%(refname:short)` output.
pub fn parse_branch_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fields: [&str; 5]) -> String {
        format!("{}{}\n", fields.join(FIELD_SEPARATOR), COMMIT_SEPARATOR)
    }

    #[test]
    fn test_log_format() {
        assert_eq!(
            log_format(),
            "%H---FIELD_SEP---%h---FIELD_SEP---%aI---FIELD_SEP---%s---FIELD_SEP---%b---COMMIT_SEP---"
        );
    }

    #[test]
    fn test_parse_log_multiple_commits() {
        let stdout = entry(["aaaa1111", "aaaa", "2025-01-01T10:00:00+00:00", "Initial commit", ""])
            + &entry([
                "bbbb2222",
                "bbbb",
                "2025-01-02T10:00:00+00:00",
                "ai-loop[root]: iteration 1 — start",
                "[node-path] root\n[iteration] 1\n",
            ]);
        let commits = parse_log(&stdout);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "aaaa1111");
        assert_eq!(commits[0].body, "");
        assert_eq!(commits[1].short_hash, "bbbb");
        assert_eq!(commits[1].date, "2025-01-02T10:00:00+00:00");
        // Chunks are trimmed, so trailing body newlines go away
        assert_eq!(commits[1].body, "[node-path] root\n[iteration] 1");
    }

    #[test]
    fn test_parse_log_body_containing_field_separator() {
        let stdout = entry(["h", "s", "d", "subj", "before"]).replace(
            &format!("before{}", COMMIT_SEPARATOR),
            &format!("before{}after{}", FIELD_SEPARATOR, COMMIT_SEPARATOR),
        );
        let commits = parse_log(&stdout);
        assert_eq!(commits[0].body, format!("before{}after", FIELD_SEPARATOR));
    }

    #[test]
    fn test_parse_log_empty() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n\n").is_empty());
    }

    #[test]
    fn test_parse_numstat() {
        let stats = parse_numstat("10\t2\tsrc/lib.rs\n-\t-\tassets/logo.png\n0\t5\told name.txt\n");
        assert_eq!(
            stats,
            vec![
                DiffFileStat {
                    file: "src/lib.rs".to_string(),
                    insertions: 10,
                    deletions: 2
                },
                DiffFileStat {
                    file: "assets/logo.png".to_string(),
                    insertions: 0,
                    deletions: 0
                },
                DiffFileStat {
                    file: "old name.txt".to_string(),
                    insertions: 0,
                    deletions: 5
                },
            ]
        );
    }

    #[test]
    fn test_parse_numstat_skips_short_lines() {
        let stats = parse_numstat("\n7\n3\t1\tok.rs\n");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].file, "ok.rs");
    }

    #[test]
    fn test_parse_branch_list() {
        let branches = parse_branch_list("ai-loop/alpha\n  ai-loop/beta  \n\n");
        assert_eq!(branches, vec!["ai-loop/alpha", "ai-loop/beta"]);
    }
}
