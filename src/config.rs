//! Validated settings for a collaboration run.

use crate::pipeline::services::CycleBudget;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Checklist document read when none is configured.
pub const DEFAULT_DOCUMENT: &str = "todo.md";

/// Workspace root used when none is configured.
pub const DEFAULT_ROOT: &str = ".";

/// Rendering of the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable transcript followed by the task status listing.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Errors raised while validating run settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The workspace root is empty.
    #[error("workspace root must not be empty")]
    EmptyRoot,
    /// The checklist document name is empty after trimming.
    #[error("document name must not be empty")]
    EmptyDocument,
}

/// Everything a run needs besides the workspace handle and the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    root: Utf8PathBuf,
    document: String,
    cycles: CycleBudget,
    format: OutputFormat,
}

impl RunSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoot`] when `root` is empty and
    /// [`ConfigError::EmptyDocument`] when `document` is blank.
    pub fn new(
        root: impl Into<Utf8PathBuf>,
        document: &str,
        cycles: CycleBudget,
        format: OutputFormat,
    ) -> Result<Self, ConfigError> {
        let root_path = root.into();
        if root_path.as_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        let trimmed = document.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyDocument);
        }
        Ok(Self {
            root: root_path,
            document: trimmed.to_owned(),
            cycles,
            format,
        })
    }

    /// Returns the workspace root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the checklist document path relative to the root.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the cycle budget.
    #[must_use]
    pub const fn cycles(&self) -> CycleBudget {
        self.cycles
    }

    /// Returns the report format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from(DEFAULT_ROOT),
            document: DEFAULT_DOCUMENT.to_owned(),
            cycles: CycleBudget::DEFAULT,
            format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DEFAULT_DOCUMENT, OutputFormat, RunSettings};
    use crate::pipeline::services::CycleBudget;
    use rstest::rstest;

    #[rstest]
    #[case(-3, 1)]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(i64::MAX, u32::MAX)]
    fn cycle_budget_is_clamped(#[case] requested: i64, #[case] expected: u32) {
        assert_eq!(CycleBudget::new(requested).get(), expected);
    }

    #[rstest]
    fn defaults_match_documented_values() {
        let settings = RunSettings::default();
        assert_eq!(settings.root().as_str(), ".");
        assert_eq!(settings.document(), DEFAULT_DOCUMENT);
        assert_eq!(settings.cycles().get(), 2);
        assert_eq!(settings.format(), OutputFormat::Text);
    }

    #[rstest]
    fn document_name_is_trimmed() -> eyre::Result<()> {
        let settings = RunSettings::new(
            "workspace",
            "  plans/todo.md ",
            CycleBudget::new(3),
            OutputFormat::Json,
        )?;
        eyre::ensure!(settings.document() == "plans/todo.md");
        eyre::ensure!(settings.cycles().get() == 3);
        Ok(())
    }

    #[rstest]
    #[case("", "todo.md", ConfigError::EmptyRoot)]
    #[case(".", "   ", ConfigError::EmptyDocument)]
    fn blank_settings_are_rejected(
        #[case] root: &str,
        #[case] document: &str,
        #[case] expected: ConfigError,
    ) {
        let result = RunSettings::new(root, document, CycleBudget::DEFAULT, OutputFormat::Text);
        assert_eq!(result, Err(expected));
    }
}
