//! Task service — validation, entity construction, and store orchestration.

use std::sync::Arc;

use chrono::Utc;

use taskboard_config::ListingConfig;
use taskboard_core::entities::Task;
use taskboard_core::enums::TaskStatus;
use taskboard_core::ids;
use taskboard_core::responses::{PagedResult, TaskView};
use taskboard_store::contract::{TaskStore, UserStore};
use taskboard_store::error::StoreError;

use crate::error::{ServiceError, unexpected};
use crate::requests::{CreateTaskRequest, TaskFilterRequest, UpdateTaskRequest};

/// Orchestrates task mutations and listings over the store contracts.
///
/// Holds no mutable state of its own; all task/user state lives in the
/// backing stores, so the service is freely shareable across requests.
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    users: Arc<dyn UserStore>,
    listing: ListingConfig,
}

impl TaskService {
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskStore>, users: Arc<dyn UserStore>, listing: ListingConfig) -> Self {
        Self {
            tasks,
            users,
            listing,
        }
    }

    /// Point lookup. A miss is a neutral `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on store failure.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<TaskView>, ServiceError> {
        let row = self
            .tasks
            .get_by_id(id)
            .await
            .map_err(|e| unexpected("tasks.get_by_id", e))?;
        Ok(row.map(TaskView::from))
    }

    /// All non-deleted tasks.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on store failure.
    pub async fn get_all(&self) -> Result<Vec<TaskView>, ServiceError> {
        let rows = self
            .tasks
            .get_all()
            .await
            .map_err(|e| unexpected("tasks.get_all", e))?;
        Ok(rows.into_iter().map(TaskView::from).collect())
    }

    /// Create a task and return its fresh id.
    ///
    /// # Errors
    ///
    /// `Validation` for bad fields, `ReferenceInvalid` when the assignee
    /// does not exist, `ServiceError` on store failure.
    pub async fn create(&self, request: CreateTaskRequest) -> Result<String, ServiceError> {
        request.validate()?;
        self.ensure_user_exists(request.user_id.as_deref()).await?;

        let task = Task {
            id: ids::generate(ids::PREFIX_TASK)?,
            title: request.title,
            description: request.description,
            status: TaskStatus::New,
            created_at: Utc::now(),
            updated_at: None,
            deadline: request.deadline,
            user_id: request.user_id,
            is_deleted: false,
            version: 0,
        };
        self.tasks
            .add(&task)
            .await
            .map_err(|e| unexpected("tasks.add", e))?;

        tracing::info!(task_id = %task.id, title = %task.title, "task created");
        Ok(task.id)
    }

    /// Overwrite a task's mutable fields.
    ///
    /// # Errors
    ///
    /// `Validation` for bad fields, `ReferenceInvalid` when the assignee does
    /// not exist (checked before the task lookup, so a bad user id is
    /// reported even when the task id is also bad), `NotFound` when the task
    /// is absent, `Conflict` when another writer modified the row since it
    /// was read.
    pub async fn update(&self, id: &str, request: UpdateTaskRequest) -> Result<(), ServiceError> {
        request.validate()?;
        self.ensure_user_exists(request.user_id.as_deref()).await?;

        let existing = self
            .tasks
            .get_by_id(id)
            .await
            .map_err(|e| unexpected("tasks.get_by_id", e))?
            .ok_or_else(|| ServiceError::NotFound {
                entity_type: "task".into(),
                id: id.to_string(),
            })?;

        let mut task = existing.task;
        task.title = request.title;
        task.description = request.description;
        task.deadline = request.deadline;
        task.user_id = request.user_id;
        task.updated_at = Some(Utc::now());

        self.write_back(&task).await?;
        tracing::info!(task_id = %id, "task updated");
        Ok(())
    }

    /// Soft-delete a task. Deleting an absent or already-deleted task is a
    /// silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on store failure.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.tasks
            .soft_delete(id)
            .await
            .map_err(|e| unexpected("tasks.soft_delete", e))?;
        tracing::info!(task_id = %id, "task soft-deleted");
        Ok(())
    }

    /// Set a task's status from its wire value.
    ///
    /// # Errors
    ///
    /// `Validation` when the value is not one of the defined statuses
    /// (checked before any store access), `NotFound` when the task is
    /// absent, `Conflict` on a lost write race.
    pub async fn change_status(&self, id: &str, status: &str) -> Result<(), ServiceError> {
        let status = TaskStatus::parse(status).ok_or_else(|| {
            ServiceError::Validation(format!("'{status}' is not a defined task status"))
        })?;

        let existing = self
            .tasks
            .get_by_id(id)
            .await
            .map_err(|e| unexpected("tasks.get_by_id", e))?
            .ok_or_else(|| ServiceError::NotFound {
                entity_type: "task".into(),
                id: id.to_string(),
            })?;

        let mut task = existing.task;
        task.status = status;
        task.updated_at = Some(Utc::now());

        self.write_back(&task).await?;
        tracing::info!(task_id = %id, status = %status, "task status changed");
        Ok(())
    }

    /// Filtered, sorted, paged listing wrapped in the paging envelope.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on store failure.
    pub async fn get_filtered(
        &self,
        request: TaskFilterRequest,
    ) -> Result<PagedResult<TaskView>, ServiceError> {
        let filter = request.into_filter(&self.listing);
        let (items, total_count) = self
            .tasks
            .get_filtered(&filter)
            .await
            .map_err(|e| unexpected("tasks.get_filtered", e))?;

        Ok(PagedResult {
            items: items.into_iter().map(TaskView::from).collect(),
            total_count,
            page: filter.page,
            page_size: filter.page_size,
        })
    }

    /// Reference validation: `None` is fine (tasks may be unassigned), a set
    /// id must resolve to an existing user.
    async fn ensure_user_exists(&self, user_id: Option<&str>) -> Result<(), ServiceError> {
        let Some(user_id) = user_id else {
            return Ok(());
        };
        let user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| unexpected("users.get_by_id", e))?;
        if user.is_none() {
            return Err(ServiceError::ReferenceInvalid {
                entity_type: "user".into(),
                id: user_id.to_string(),
            });
        }
        Ok(())
    }

    /// Write a mutated task back, translating store outcomes into the
    /// service taxonomy.
    async fn write_back(&self, task: &Task) -> Result<(), ServiceError> {
        self.tasks.update(task).await.map_err(|e| match e {
            StoreError::Conflict { id } => ServiceError::Conflict {
                entity_type: "task".into(),
                id,
            },
            StoreError::NoResult => ServiceError::NotFound {
                entity_type: "task".into(),
                id: task.id.clone(),
            },
            other => unexpected("tasks.update", other),
        })
    }
}
