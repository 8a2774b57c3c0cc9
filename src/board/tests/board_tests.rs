//! Unit tests for task board mutation and queries.

use crate::board::domain::{
    AgentName, BoardUpdate, Task, TaskBoard, TaskKey, TaskRecord, TaskStatus,
};
use eyre::{ensure, eyre};
use rstest::{fixture, rstest};

#[fixture]
fn board() -> TaskBoard {
    [
        Task::new("Ops", "Run integration test"),
        Task::new("Ops", "Deploy service"),
        Task::new("UI", "Add sidebar link"),
        Task::new("Ops", "Add Test fixtures"),
    ]
    .into_iter()
    .collect()
}

fn key(section: &str, description: &str) -> TaskKey {
    TaskKey::new(section, description)
}

#[rstest]
fn assign_sets_owner_status_and_index(mut board: TaskBoard) -> eyre::Result<()> {
    let deploy = key("Ops", "Deploy service");
    let owner = AgentName::from("Release Engineer");

    ensure!(board.assign(&deploy, owner.clone()) == BoardUpdate::Applied);

    let task = board.get(&deploy).ok_or_else(|| eyre!("task missing"))?;
    ensure!(task.owner() == Some(&owner));
    ensure!(task.status() == TaskStatus::Assigned);
    ensure!(board.keys_for_owner(&owner) == [deploy]);
    Ok(())
}

#[rstest]
fn assign_overrides_advanced_status(mut board: TaskBoard) -> eyre::Result<()> {
    let test = key("Ops", "Run integration test");
    ensure!(board.set_status(&test, TaskStatus::ReadyForQa).is_applied());
    ensure!(board.assign(&test, "Backend Agent".into()).is_applied());
    let task = board.get(&test).ok_or_else(|| eyre!("task missing"))?;
    ensure!(task.status() == TaskStatus::Assigned);
    Ok(())
}

#[rstest]
fn assign_twice_appends_twice(mut board: TaskBoard) {
    let link = key("UI", "Add sidebar link");
    let owner = AgentName::from("Frontend Agent");

    assert!(board.assign(&link, owner.clone()).is_applied());
    assert!(board.assign(&link, owner.clone()).is_applied());

    assert_eq!(board.keys_for_owner(&owner), [link.clone(), link]);
}

#[rstest]
fn unknown_keys_are_ignored_without_side_effects(mut board: TaskBoard) {
    let before = board.clone();
    let missing = key("nonexistent", "key");

    assert_eq!(board.assign(&missing, "X".into()), BoardUpdate::Ignored);
    assert_eq!(board.set_status(&missing, TaskStatus::Done), BoardUpdate::Ignored);

    assert_eq!(board, before);
    assert!(board.keys_for_owner(&"X".into()).is_empty());
}

#[rstest]
fn set_status_does_not_validate_transitions(mut board: TaskBoard) -> eyre::Result<()> {
    let link = key("UI", "Add sidebar link");
    ensure!(board.set_status(&link, TaskStatus::Released).is_applied());
    ensure!(board.set_status(&link, TaskStatus::Pending).is_applied());
    let task = board.get(&link).ok_or_else(|| eyre!("task missing"))?;
    ensure!(task.status() == TaskStatus::Pending);
    ensure!(task.owner().is_none());
    Ok(())
}

#[rstest]
fn pending_keys_skip_terminal_tasks_in_insertion_order(mut board: TaskBoard) {
    assert!(board.set_status(&key("Ops", "Deploy service"), TaskStatus::Released).is_applied());
    assert!(board.set_status(&key("UI", "Add sidebar link"), TaskStatus::Done).is_applied());

    assert_eq!(
        board.pending_keys(),
        vec![key("Ops", "Run integration test"), key("Ops", "Add Test fixtures")]
    );
}

#[rstest]
fn keys_for_unknown_owner_are_empty(board: TaskBoard) {
    assert!(board.keys_for_owner(&"QA Agent".into()).is_empty());
}

#[rstest]
fn dependencies_match_test_case_insensitively_within_section(board: TaskBoard) {
    assert_eq!(
        board.dependencies_of("Ops"),
        vec![key("Ops", "Run integration test"), key("Ops", "Add Test fixtures")]
    );
    assert!(board.dependencies_of("UI").is_empty());
    assert!(board.dependencies_of("Missing").is_empty());
}

#[rstest]
fn convergence_requires_every_task_terminal(mut board: TaskBoard) {
    assert!(!board.is_converged());
    for task_key in board.pending_keys() {
        assert!(board.set_status(&task_key, TaskStatus::Done).is_applied());
    }
    assert!(board.is_converged());
    assert!(TaskBoard::new().is_converged());
}

#[rstest]
fn insert_replaces_existing_key_in_place(mut board: TaskBoard) -> eyre::Result<()> {
    let replaced = board.insert(Task::from_record(TaskRecord {
        section: "Ops".to_owned(),
        description: "Deploy service".to_owned(),
        owner: None,
        status: TaskStatus::Assigned,
    }));

    ensure!(replaced.is_some_and(|task| task.status() == TaskStatus::Pending));
    ensure!(board.len() == 4);
    let second = board
        .iter()
        .nth(1)
        .ok_or_else(|| eyre!("board shrank"))?;
    ensure!(second.key() == &key("Ops", "Deploy service"));
    ensure!(second.status() == TaskStatus::Assigned);
    Ok(())
}

#[rstest]
fn key_renders_section_and_description() {
    assert_eq!(key("UI", "Add sidebar link").to_string(), "UI :: Add sidebar link");
}
