//! Store capability traits consumed by the service layer.
//!
//! The traits are the seam between orchestration and persistence: the
//! service holds `Arc<dyn TaskStore>` / `Arc<dyn UserStore>`, so tests can
//! substitute in-memory fakes and the libSQL adapters stay swappable.
//!
//! Every read method excludes soft-deleted rows; the adapters enforce that
//! with a single standing predicate at their one SQL-building site, not
//! per call site.

use async_trait::async_trait;

use taskboard_core::entities::{Task, TaskWithAssignee, User};
use taskboard_core::filter::TaskFilter;

use crate::error::StoreError;

/// Persistent task storage.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Point lookup. `None` when the id is unknown or the row is
    /// soft-deleted.
    async fn get_by_id(&self, id: &str) -> Result<Option<TaskWithAssignee>, StoreError>;

    /// All non-deleted tasks, newest first.
    async fn get_all(&self) -> Result<Vec<TaskWithAssignee>, StoreError>;

    /// Insert a freshly constructed task.
    async fn add(&self, task: &Task) -> Result<(), StoreError>;

    /// Write back a mutated task.
    ///
    /// The write is a compare-and-swap on `task.version`: it succeeds only
    /// if the stored version still matches, and bumps the version in the
    /// same statement. Fails with [`StoreError::Conflict`] when another
    /// writer got there first, and [`StoreError::NoResult`] when the row no
    /// longer exists (or was soft-deleted) since it was read.
    async fn update(&self, task: &Task) -> Result<(), StoreError>;

    /// Flip the soft-delete flag and stamp `updated_at`. Silent no-op when
    /// the id is unknown or the row is already deleted.
    async fn soft_delete(&self, id: &str) -> Result<(), StoreError>;

    /// Filtered, sorted, paged listing plus the total match count before
    /// pagination.
    ///
    /// The count and the page are two independent queries with no shared
    /// snapshot; they can disagree slightly under concurrent writers.
    async fn get_filtered(
        &self,
        filter: &TaskFilter,
    ) -> Result<(Vec<TaskWithAssignee>, u64), StoreError>;

    /// All non-deleted tasks assigned to a user, newest first. Unknown
    /// users simply yield an empty list.
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<TaskWithAssignee>, StoreError>;
}

/// Persistent user storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Point lookup. `None` when the id is unknown.
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
}
