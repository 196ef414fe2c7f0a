//! Terminal rendering of runs and iteration details.

use colored::*;
use std::fmt;

use crate::domain::{InnerIteration, IterationDetail, LoopRun, ParsedCommit, Sensor, SensorStatus};

fn sensor_badge(sensor: &Sensor) -> ColoredString {
    match sensor.status {
        SensorStatus::Pass => format!("{} ✓", sensor.name).green(),
        SensorStatus::Fail => format!("{} ✗", sensor.name).red(),
        SensorStatus::Partial => format!("{} ~", sensor.name).yellow(),
        SensorStatus::Pending => format!("{} …", sensor.name).cyan(),
        SensorStatus::Unknown => format!("{} ?", sensor.name).dimmed(),
    }
}

fn sensor_line(sensors: &[Sensor]) -> String {
    sensors
        .iter()
        .map(|s| sensor_badge(s).to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

fn when(commit: &ParsedCommit) -> String {
    commit
        .timestamp()
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| commit.date.clone())
}

fn inner_line(f: &mut fmt::Formatter<'_>, inner: &InnerIteration) -> fmt::Result {
    writeln!(
        f,
        "    {} {}  {}  {}",
        "○".blue(),
        inner.iteration_label.bold(),
        inner.commit.title,
        format!("({}, {})", inner.commit.short_hash, when(&inner.commit)).dimmed()
    )?;
    if let Some(meta) = &inner.commit.metadata
        && !meta.sensors.is_empty()
    {
        writeln!(f, "        {}", sensor_line(&meta.sensors))?;
    }
    Ok(())
}

struct RunView<'a> {
    run: &'a LoopRun,
    show_non_loop: bool,
}

impl fmt::Display for RunView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.run;

        writeln!(f, "{}  {}", run.branch.bold(), format!("({})", run.repo_path).dimmed())?;
        if !run.outer_node_name.is_empty() || !run.inner_node_name.is_empty() {
            writeln!(
                f,
                "outer: {}   inner: {}",
                run.outer_node_name.cyan(),
                run.inner_node_name.cyan()
            )?;
        }
        writeln!(
            f,
            "{} commits, {} outer iterations, {} placed in tree, {} non-loop",
            run.all_commits.len(),
            run.outer_iterations.len(),
            run.iteration_count(),
            run.non_loop_commits.len()
        )?;

        if run.outer_iterations.is_empty() {
            writeln!(f, "\n{}", "No loop iterations found".yellow())?;
        }

        for outer in &run.outer_iterations {
            writeln!(f)?;
            writeln!(
                f,
                "{} {}  {}  {}",
                "●".green(),
                outer.label().bold(),
                outer.commit.title,
                format!("({}, {})", outer.commit.short_hash, when(&outer.commit)).dimmed()
            )?;
            writeln!(f, "    target-met: {}", outer.target_met)?;
            if !outer.action.is_empty() {
                writeln!(f, "    action: {}", outer.action)?;
            }
            if !outer.sensors.is_empty() {
                writeln!(f, "    {}", sensor_line(&outer.sensors))?;
            }
            for inner in &outer.inner_iterations {
                inner_line(f, inner)?;
            }
        }

        if !run.unattached_inner_iterations.is_empty() {
            writeln!(f, "\n{}", "Inner iterations without an outer commit:".yellow())?;
            for inner in &run.unattached_inner_iterations {
                inner_line(f, inner)?;
            }
        }

        if self.show_non_loop && !run.non_loop_commits.is_empty() {
            writeln!(f, "\n{}", "Non-loop commits:".bold())?;
            for commit in &run.non_loop_commits {
                writeln!(f, "  {}  {}", commit.short_hash.dimmed(), commit.subject)?;
            }
        }

        Ok(())
    }
}

struct DetailView<'a>(&'a IterationDetail);

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let detail = &view.detail;
        let commit = &detail.commit;

        let label = commit.iteration().unwrap_or("?");
        writeln!(f, "{} {}  {}", "Iteration".bold(), label.bold(), commit.title)?;
        writeln!(f, "commit {}", commit.hash.yellow())?;
        writeln!(f, "date   {}", when(commit))?;

        if let Some(meta) = &commit.metadata {
            writeln!(f, "node   {} (level {})", meta.node_path, meta.level)?;
            writeln!(f, "status {}   target-met {}", meta.status, meta.target_met)?;
            if !meta.action.is_empty() {
                writeln!(f, "action {}", meta.action)?;
            }
            if !meta.sensors.is_empty() {
                writeln!(f, "\n{}", "Sensors:".bold())?;
                for sensor in &meta.sensors {
                    match &sensor.details {
                        Some(details) if sensor.status != SensorStatus::Unknown => {
                            writeln!(f, "  {}  {}", sensor_badge(sensor), details.dimmed())?
                        }
                        _ => writeln!(f, "  {}", sensor_badge(sensor))?,
                    }
                }
            }
        }

        writeln!(
            f,
            "\n{} files changed, {} insertions(+), {} deletions(-)",
            detail.files_changed,
            detail.total_insertions.to_string().green(),
            detail.total_deletions.to_string().red()
        )?;
        for stat in &detail.diff_stats {
            writeln!(
                f,
                "  {:>5} {:>5}  {}",
                format!("+{}", stat.insertions).green(),
                format!("-{}", stat.deletions).red(),
                stat.file
            )?;
        }

        let previous = view.previous.as_deref().unwrap_or("-");
        let next = view.next.as_deref().unwrap_or("-");
        writeln!(f, "\n← {}   → {}", previous, next)
    }
}

/// Render the iteration tree for a run.
pub fn render_run(run: &LoopRun, show_non_loop: bool) -> String {
    RunView { run, show_non_loop }.to_string()
}

/// Render one iteration with its diff stats and neighbours.
pub fn render_detail(view: &IterationDetail) -> String {
    DetailView(view).to_string()
}

/// Render the loop branch list for a repository.
pub fn render_branches(repo: &str, branches: &[String]) -> String {
    if branches.is_empty() {
        return format!("{} {}\n", "No loop branches in".yellow(), repo);
    }
    branches.iter().map(|branch| format!("{}\n", branch)).collect()
}
