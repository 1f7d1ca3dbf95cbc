//! Transport-facing response records.
//!
//! These are the shapes the (out-of-scope) HTTP layer serializes: a task
//! enriched with its assignee's name/email, and the paged listing envelope.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::TaskWithAssignee;
use crate::enums::TaskStatus;

/// A task as presented to callers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl From<TaskWithAssignee> for TaskView {
    fn from(row: TaskWithAssignee) -> Self {
        Self {
            id: row.task.id,
            title: row.task.title,
            description: row.task.description,
            status: row.task.status,
            created_at: row.task.created_at,
            deadline: row.task.deadline,
            user_id: row.task.user_id,
            user_name: row.assignee_name,
            user_email: row.assignee_email,
        }
    }
}

/// A page of results plus the total match count before pagination.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}
