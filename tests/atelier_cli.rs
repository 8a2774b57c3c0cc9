//! Behavioural tests for the `atelier` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use eyre::{Result, ensure, eyre};
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn atelier_path() -> Result<PathBuf> {
    std::env::var_os("CARGO_BIN_EXE_atelier")
        .map(PathBuf::from)
        .ok_or_else(|| eyre!("CARGO_BIN_EXE_atelier is not set; ensure the atelier binary is built"))
}

/// Builds a command with every `ATELIER_*` fallback cleared.
fn atelier() -> Result<Command> {
    let mut command = Command::new(atelier_path()?);
    for name in ["ATELIER_CYCLES", "ATELIER_ROOT", "ATELIER_DOCUMENT"] {
        command.env_remove(name);
    }
    Ok(command)
}

fn run(command: &mut Command) -> Result<Output> {
    command.output().map_err(|err| eyre!(err))
}

#[fixture]
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("create temp dir: {err}"));
    fs::create_dir(dir.path().join("web"))
        .unwrap_or_else(|err| panic!("create web dir: {err}"));
    fs::write(
        dir.path().join("plan.md"),
        "## Ops\n- [ ] Deploy test harness\n",
    )
    .unwrap_or_else(|err| panic!("write checklist: {err}"));
    dir
}

#[rstest]
fn unopenable_root_exits_with_failure(workspace: TempDir) -> Result<()> {
    let missing = workspace.path().join("absent");
    let output = run(atelier()?.arg("--root").arg(&missing))?;
    ensure!(!output.status.success(), "expected failure status");
    ensure!(output.stdout.is_empty(), "no report should be written");
    Ok(())
}

#[rstest]
fn environment_fallbacks_select_root_document_and_cycles(workspace: TempDir) -> Result<()> {
    let output = run(atelier()?
        .env("ATELIER_ROOT", workspace.path())
        .env("ATELIER_DOCUMENT", "plan.md")
        .env("ATELIER_CYCLES", "3"))?;

    ensure!(output.status.success(), "expected success status");
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout.starts_with("Multi-Agent Collaboration Log\n"));
    ensure!(stdout.contains("[ASSIGNED] Ops :: Deploy test harness"), "{stdout}");
    let review_notes = stdout
        .lines()
        .filter(|line| line.starts_with("Review Architect → Lead Architect: "))
        .count();
    ensure!(review_notes == 3, "expected three cycles, got {review_notes}");
    Ok(())
}

#[rstest]
fn json_format_and_negative_cycles(workspace: TempDir) -> Result<()> {
    let output = run(atelier()?
        .arg("--root")
        .arg(workspace.path())
        .args(["--document", "plan.md", "--cycles", "-3", "--format", "json"]))?;

    ensure!(output.status.success(), "expected success status");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    ensure!(value.pointer("/summary/cycles_completed") == Some(&serde_json::json!(1)));
    ensure!(value.pointer("/directories/0") == Some(&serde_json::json!("web")));
    Ok(())
}

#[rstest]
fn unknown_format_is_rejected(workspace: TempDir) -> Result<()> {
    let output = run(atelier()?
        .arg("--root")
        .arg(workspace.path())
        .args(["--format", "yaml"]))?;
    ensure!(!output.status.success(), "expected failure status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(stderr.contains("yaml"), "expected the rejected value in: {stderr}");
    Ok(())
}
