//! Rendering of a finished run.
//!
//! The text transcript lists every note in send order followed by the final
//! status of every task. The JSON form carries the same content plus the run
//! identifier, summary and assignment index.

use crate::board::domain::{AssignmentIndex, Task};
use crate::config::OutputFormat;
use crate::pipeline::domain::{AgentNote, RunId};
use crate::pipeline::services::{CollaborationRun, RunSummary};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

const TRANSCRIPT_TITLE: &str = "Multi-Agent Collaboration Log";
const STATUS_TITLE: &str = "Task Statuses";
const RULE_WIDTH: usize = 40;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    /// Serialising the JSON report failed.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialisable view of a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Run identifier.
    pub run_id: RunId,
    /// Cycle count and convergence outcome.
    pub summary: RunSummary,
    /// Top-level directory snapshot.
    pub directories: &'a [String],
    /// Notes in send order.
    pub notes: &'a [AgentNote],
    /// Tasks in board order.
    pub tasks: Vec<&'a Task>,
    /// Keys assigned to each agent.
    pub assignments: &'a AssignmentIndex,
}

impl<'a> From<&'a CollaborationRun> for RunReport<'a> {
    fn from(run: &'a CollaborationRun) -> Self {
        let context = &run.context;
        Self {
            run_id: context.run_id(),
            summary: run.summary,
            directories: context.directories(),
            notes: context.notes(),
            tasks: context.board().iter().collect(),
            assignments: context.board().assignments(),
        }
    }
}

/// Writes `run` to `out` in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] when writing or encoding fails.
pub fn write_report<W: Write>(
    run: &CollaborationRun,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => write_transcript(run, out)?,
        OutputFormat::Json => write_json(run, out)?,
    }
    Ok(())
}

/// Writes the human-readable transcript.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_transcript<W: Write>(run: &CollaborationRun, out: &mut W) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{TRANSCRIPT_TITLE}")?;
    writeln!(out, "{rule}")?;
    for note in run.context.notes() {
        writeln!(out, "{note}")?;
    }
    writeln!(out)?;
    writeln!(out, "{STATUS_TITLE}")?;
    writeln!(out, "{rule}")?;
    for task in run.context.board().iter() {
        writeln!(out, "{}", status_line(task))?;
    }
    Ok(())
}

/// Writes the pretty-printed JSON report followed by a newline.
///
/// # Errors
///
/// Returns [`ReportError`] when encoding or writing fails.
pub fn write_json<W: Write>(run: &CollaborationRun, out: &mut W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, &RunReport::from(run))?;
    writeln!(out)?;
    Ok(())
}

/// Formats one task as `[  STATUS] section :: description`.
#[must_use]
pub fn status_line(task: &Task) -> String {
    format!(
        "[{:>8}] {}",
        task.status().as_str().to_ascii_uppercase(),
        task.key()
    )
}

#[cfg(test)]
mod tests {
    use super::{status_line, write_json, write_transcript};
    use crate::board::domain::{Task, TaskBoard, TaskRecord, TaskStatus};
    use crate::pipeline::domain::CollaborationContext;
    use crate::pipeline::services::{CollaborationRun, RunSummary};
    use rstest::{fixture, rstest};

    #[fixture]
    fn finished_run() -> CollaborationRun {
        let board: TaskBoard = [
            Task::new("UI", "Add sidebar link"),
            Task::from_record(TaskRecord {
                section: "Ops".to_owned(),
                description: "Deploy service".to_owned(),
                owner: Some("Release Engineer".into()),
                status: TaskStatus::ReadyForQa,
            }),
        ]
        .into_iter()
        .collect();
        CollaborationRun {
            context: CollaborationContext::new(vec!["src".to_owned()], board),
            summary: RunSummary {
                cycles_completed: 1,
                converged: false,
                notes_recorded: 0,
            },
        }
    }

    #[rstest]
    #[case(TaskStatus::Done, "[    DONE] UI :: Add sidebar link")]
    #[case(TaskStatus::Pending, "[ PENDING] UI :: Add sidebar link")]
    #[case(TaskStatus::ReadyForQa, "[READY-FOR-QA] UI :: Add sidebar link")]
    fn status_line_pads_uppercase_status(#[case] status: TaskStatus, #[case] expected: &str) {
        let task = Task::from_record(TaskRecord {
            section: "UI".to_owned(),
            description: "Add sidebar link".to_owned(),
            owner: None,
            status,
        });
        assert_eq!(status_line(&task), expected);
    }

    #[rstest]
    fn transcript_lists_headers_and_every_task(finished_run: CollaborationRun) -> eyre::Result<()> {
        let mut out = Vec::new();
        write_transcript(&finished_run, &mut out)?;
        let text = String::from_utf8(out)?;
        let rule = "-".repeat(40);
        let expected = format!(
            "Multi-Agent Collaboration Log\n{rule}\n\nTask Statuses\n{rule}\n\
             [ PENDING] UI :: Add sidebar link\n\
             [READY-FOR-QA] Ops :: Deploy service\n"
        );
        eyre::ensure!(text == expected, "unexpected transcript:\n{text}");
        Ok(())
    }

    #[rstest]
    fn json_report_carries_keys_and_kebab_case_statuses(
        finished_run: CollaborationRun,
    ) -> eyre::Result<()> {
        let mut out = Vec::new();
        write_json(&finished_run, &mut out)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        let tasks = value
            .get("tasks")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| eyre::eyre!("missing tasks array"))?;
        eyre::ensure!(tasks.len() == 2);
        let second = tasks
            .get(1)
            .ok_or_else(|| eyre::eyre!("missing second task"))?;
        eyre::ensure!(second.get("key") == Some(&serde_json::json!("Ops :: Deploy service")));
        eyre::ensure!(second.get("status") == Some(&serde_json::json!("ready-for-qa")));
        eyre::ensure!(second.get("owner") == Some(&serde_json::json!("Release Engineer")));
        eyre::ensure!(
            value.pointer("/summary/cycles_completed") == Some(&serde_json::json!(1))
        );
        Ok(())
    }
}
