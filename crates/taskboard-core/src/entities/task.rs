use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// One unit of work, optionally assigned to a user.
///
/// `version` is the optimistic concurrency token: the store bumps it on every
/// write and compares it in the UPDATE's WHERE clause, so a stale write is
/// detected as a conflict instead of silently overwriting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    /// Null until the first mutation; stamped on every mutation after that.
    pub updated_at: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub is_deleted: bool,
    pub version: i64,
}

/// A task row joined with its assignee's name and email.
///
/// The assignee fields are `None` when the task is unassigned or the
/// referenced user no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskWithAssignee {
    pub task: Task,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
}
