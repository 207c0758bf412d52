use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One recorded agent run: what was asked, the step narrations, what came
/// back, and the screenshot evidence captured along the way.
///
/// Owned by the caller and never mutated. Duplicate screenshot paths are
/// permitted and kept in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub task: String,
    #[serde(default)]
    pub steps: Vec<String>,
    pub final_result: String,
    #[serde(default)]
    pub screenshots: Vec<PathBuf>,
}

impl Trace {
    pub fn new(task: impl Into<String>, final_result: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            final_result: final_result.into(),
            ..Self::default()
        }
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_screenshots<I, P>(mut self, screenshots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.screenshots = screenshots.into_iter().map(Into::into).collect();
        self
    }

    /// Step narrations as one newline-joined block.
    #[must_use]
    pub fn joined_steps(&self) -> String {
        self.steps.join("\n")
    }
}
