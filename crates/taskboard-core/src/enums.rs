//! Status enum for tasks.
//!
//! Serialized as `snake_case` via `#[serde(rename_all = "snake_case")]`, the
//! same strings the store persists in the `status` column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task.
///
/// Every task starts as `New`; `ChangeStatus` may move it to any of the
/// defined variants. There is deliberately no transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Parse a wire value into a defined status.
    ///
    /// Exhaustive membership test: exactly the three defined variants are
    /// accepted, everything else is `None`. Callers turn `None` into a
    /// validation failure before any store access happens.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(Self::New),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
