use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A task assignee. Owns zero or more tasks via `Task::user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
