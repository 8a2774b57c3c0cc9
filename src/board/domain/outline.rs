//! Parser for heading-structured checklist documents.

use super::{DEFAULT_SECTION, Task, TaskBoard};

/// Prefix of a line that opens a new section.
pub const HEADING_MARKER: &str = "##";

/// Prefix of a line that declares an open task.
pub const CHECKLIST_MARKER: &str = "- [ ]";

/// Characters that end a line, including the legacy control and Unicode
/// separators. `\r\n` yields an empty fragment, which matches no marker.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Builds a board from a checklist document.
///
/// Lines may end with `\n`, `\r\n`, a lone `\r` or any Unicode line
/// separator, and are trimmed before matching. A `##` heading (any depth from
/// two hashes up) names the section for the tasks that follow; every `- [ ]`
/// line becomes a pending task under the current section, or under
/// [`DEFAULT_SECTION`] before the first heading. Checked items and all other
/// lines are skipped.
///
/// # Examples
///
/// ```
/// use atelier::board::domain::{TaskKey, parse_outline};
///
/// let board = parse_outline("## UI\n- [ ] Add sidebar link\n- [x] Old item\n");
/// assert_eq!(board.len(), 1);
/// assert!(board.get(&TaskKey::new("UI", "Add sidebar link")).is_some());
/// ```
#[must_use]
pub fn parse_outline(contents: &str) -> TaskBoard {
    let mut board = TaskBoard::new();
    let mut section = DEFAULT_SECTION.to_owned();

    for raw_line in contents.split(LINE_BREAKS) {
        let line = raw_line.trim();
        if line.starts_with(HEADING_MARKER) {
            line.trim_start_matches('#').trim().clone_into(&mut section);
            continue;
        }
        if let Some(rest) = line.strip_prefix(CHECKLIST_MARKER) {
            board.insert(Task::new(section.clone(), rest.trim()));
        }
    }

    board
}
