//! End-to-end behaviour of parsing plus hierarchy building
//!
//! Exercises the public API with hand-built commit histories.

use loopview::domain::{LoopRun, RawCommit, Sensor, SensorStatus};
use loopview::hierarchy::{build_loop_run, navigation_order, neighbors};
use loopview::parser::{format_sensors, parse_commit, parse_commits, parse_sensors};

fn raw(hash: &str, subject: &str, body: &str) -> RawCommit {
    RawCommit {
        hash: hash.to_string(),
        short_hash: hash.to_string(),
        date: "2025-05-05T12:00:00+02:00".to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
    }
}

fn outer(hash: &str, number: u64) -> RawCommit {
    raw(
        hash,
        &format!("ai-loop[root]: iteration {} — outer {}", number, hash),
        &format!("[node-path] root\n[level] 0\n[iteration] {}", number),
    )
}

fn inner(hash: &str, label: &str) -> RawCommit {
    raw(
        hash,
        &format!("ai-loop[root/inner]: iteration {} — inner {}", label, hash),
        &format!("[node-path] root/inner\n[level] 1\n[iteration] {}", label),
    )
}

fn build(history: &[RawCommit]) -> LoopRun {
    build_loop_run("/repo", "ai-loop/test", parse_commits(history))
}

#[test]
fn test_example_inner_commit() {
    let history = vec![
        raw(
            "i21",
            "ai-loop[root/a]: iteration 2.1 — retry sensor fix",
            "[node-path] root/a/b\n[level] 1\n[iteration] 2.1\n[sensors] verify: pass, lint: fail (missing rule)",
        ),
        outer("o2", 2),
    ];
    let parsed = parse_commit(&history[0]);
    let meta = parsed.metadata.as_ref().unwrap();
    assert_eq!(meta.level, 1);
    assert_eq!(
        meta.sensors,
        vec![
            Sensor::new("verify", SensorStatus::Pass),
            Sensor::new("lint", SensorStatus::Fail).with_details("missing rule"),
        ]
    );

    let run = build(&history);
    assert_eq!(run.outer_iterations[0].iteration_number, 2);
    assert_eq!(run.outer_iterations[0].inner_iterations[0].commit.hash, "i21");
}

#[test]
fn test_example_missing_iteration_goes_to_non_loop() {
    let history = vec![raw(
        "x",
        "ai-loop[root]: iteration 4 — perfect subject",
        "[node-path] root\n[level] 0\n[status] done",
    )];
    let run = build(&history);
    assert!(!run.all_commits[0].is_ai_loop);
    assert!(run.outer_iterations.is_empty());
    assert_eq!(run.non_loop_commits.len(), 1);
}

#[test]
fn test_example_duplicate_outer_last_wins() {
    let run = build(&[outer("a", 5), outer("b", 5)]);
    let fives: Vec<_> = run.outer_iterations.iter().filter(|o| o.iteration_number == 5).collect();
    assert_eq!(fives.len(), 1);
    assert_eq!(fives[0].commit.hash, "b");
}

#[test]
fn test_example_orphan_inner_dropped_from_tree() {
    let run = build(&[outer("o1", 1), inner("i91", "9.1")]);
    assert!(run.outer_iterations.iter().all(|o| o.iteration_number != 9));
    let in_tree = run
        .outer_iterations
        .iter()
        .flat_map(|o| o.inner_iterations.iter())
        .any(|i| i.iteration_label == "9.1");
    assert!(!in_tree);
    assert!(!navigation_order(&run).contains(&"9.1".to_string()));
}

#[test]
fn test_example_navigation() {
    let run = build(&[outer("o1", 1), inner("i21", "2.1"), outer("o2", 2)]);
    let order = navigation_order(&run);
    assert_eq!(order, vec!["1", "2.1", "2"]);
    assert_eq!(neighbors(&order, "2.1"), (Some("1".to_string()), Some("2".to_string())));
}

#[test]
fn test_outer_sorted_regardless_of_input_order() {
    let orders: [&[u64]; 4] = [&[3, 1, 2], &[10, 9, 1, 2], &[5, 4, 3, 2, 1], &[2, 11, 7]];
    for numbers in orders {
        let history: Vec<_> = numbers.iter().map(|n| outer(&format!("o{}", n), *n)).collect();
        let run = build(&history);
        let got: Vec<_> = run.outer_iterations.iter().map(|o| o.iteration_number).collect();
        assert!(got.windows(2).all(|w| w[0] < w[1]), "not ascending: {:?}", got);
        assert_eq!(got.len(), numbers.len());
    }
}

#[test]
fn test_non_loop_relative_order_preserved() {
    let history = vec![
        raw("h1", "chore: one", ""),
        outer("o1", 1),
        raw("h2", "chore: two", "[node-path] root"),
        inner("i11", "1.1"),
        raw("h3", "ai-loop[root]: iteration 5 — no body", ""),
        raw("h4", "chore: four", "[node-path] root\n[iteration] 3"),
    ];
    let run = build(&history);
    let hashes: Vec<_> = run.non_loop_commits.iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(hashes, vec!["h1", "h2", "h3", "h4"]);

    let all_hashes: Vec<_> = run.all_commits.iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(all_hashes, vec!["h1", "o1", "h2", "i11", "h3", "h4"]);
}

#[test]
fn test_is_ai_loop_requires_both_conditions() {
    let cases = [
        ("ai-loop[r]: iteration 1 — t", "[node-path] r\n[iteration] 1", true),
        ("ai-loop[r]: iteration 1 — t", "[iteration] 1", false),
        ("ai-loop[r]: iteration 1 — t", "[node-path] r", false),
        ("iteration 1 — t", "[node-path] r\n[iteration] 1", false),
        ("", "", false),
    ];
    for (subject, body, expected) in cases {
        let parsed = parse_commit(&raw("h", subject, body));
        assert_eq!(parsed.is_ai_loop, expected, "subject {:?} body {:?}", subject, body);
    }
}

#[test]
fn test_sensor_reparse_is_stable() {
    let lists = [
        "verify: pass",
        "verify: pass (trivial), coverage: fail (no jacoco), lint: fail (no spotless)",
        "a: partial (3/5, flaky), b_2: pending",
    ];
    for list in lists {
        let sensors = parse_sensors(list);
        assert_eq!(parse_sensors(&format_sensors(&sensors)), sensors);
    }
}

#[test]
fn test_run_serializes_to_json() {
    let run = build(&[outer("o1", 1), inner("i11", "1.1")]);
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["outer_iterations"][0]["iteration_number"], 1);
    assert_eq!(json["outer_iterations"][0]["inner_iterations"][0]["iteration_label"], "1.1");
    assert_eq!(json["inner_node_name"], "inner");
}
