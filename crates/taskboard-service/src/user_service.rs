//! User service — a thin facade over the task store's by-user listing.

use std::sync::Arc;

use taskboard_core::responses::TaskView;
use taskboard_store::contract::TaskStore;

use crate::error::{ServiceError, unexpected};

/// Returns a user's tasks. Deliberately does not validate that the user
/// exists: an unknown id simply yields an empty list.
pub struct UserService {
    tasks: Arc<dyn TaskStore>,
}

impl UserService {
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// All non-deleted tasks assigned to `user_id`, unpaged.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on store failure.
    pub async fn get_user_tasks(&self, user_id: &str) -> Result<Vec<TaskView>, ServiceError> {
        let rows = self
            .tasks
            .get_by_user(user_id)
            .await
            .map_err(|e| unexpected("tasks.get_by_user", e))?;
        Ok(rows.into_iter().map(TaskView::from).collect())
    }
}
