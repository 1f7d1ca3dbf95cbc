//! Inbound request records and their field validation.
//!
//! The transport layer deserializes these; the services validate them before
//! touching any store. Limits mirror the column constraints in the schema.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;

use taskboard_config::ListingConfig;
use taskboard_core::enums::TaskStatus;
use taskboard_core::filter::{SortDirection, SortField, TaskFilter};

use crate::error::ServiceError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Shared field rules for create and update.
fn validate_task_fields(
    title: &str,
    description: Option<&str>,
    deadline: Option<DateTime<Utc>>,
) -> Result<(), ServiceError> {
    if title.trim().is_empty() {
        return Err(ServiceError::Validation("Title is required.".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ServiceError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters."
        )));
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ServiceError::Validation(format!(
                "Description must be at most {MAX_DESCRIPTION_LEN} characters."
            )));
        }
    }
    if let Some(deadline) = deadline {
        if deadline <= Utc::now() {
            return Err(ServiceError::Validation(
                "Deadline must be in the future.".into(),
            ));
        }
    }
    Ok(())
}

/// Request to create a task.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

impl CreateTaskRequest {
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` when a field breaks the rules.
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_task_fields(&self.title, self.description.as_deref(), self.deadline)
    }
}

/// Request to overwrite a task's mutable fields.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

impl UpdateTaskRequest {
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` when a field breaks the rules.
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_task_fields(&self.title, self.description.as_deref(), self.deadline)
    }
}

/// Raw filter parameters for a task listing.
///
/// `sort_by`/`sort_direction` stay raw strings here: unrecognized values are
/// not errors, they fall back to the defaults when translated.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TaskFilterRequest {
    pub status: Option<TaskStatus>,
    pub user_id: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TaskFilterRequest {
    /// Translate into a typed filter, applying the configured page-size
    /// default and the max-page-size guard against unbounded scans.
    #[must_use]
    pub fn into_filter(self, listing: &ListingConfig) -> TaskFilter {
        TaskFilter {
            status: self.status,
            user_id: self.user_id,
            sort_by: self
                .sort_by
                .as_deref()
                .map_or_else(SortField::default, SortField::parse),
            direction: self
                .sort_direction
                .as_deref()
                .map_or_else(SortDirection::default, SortDirection::parse),
            page: self.page.unwrap_or(1).max(1),
            page_size: self
                .page_size
                .unwrap_or(listing.default_page_size)
                .min(listing.max_page_size),
        }
    }
}
