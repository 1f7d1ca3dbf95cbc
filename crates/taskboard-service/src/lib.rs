//! # taskboard-service
//!
//! Task and user services for Taskboard.
//!
//! Orchestrates request validation, cross-entity reference checks, entity
//! construction and mutation, and delegation to the store contracts from
//! `taskboard-store`. Audit events are emitted as `tracing` info records;
//! they never affect control flow.

pub mod error;
pub mod requests;
mod task_service;
#[cfg(test)]
mod test_support;
mod user_service;

pub use error::ServiceError;
pub use requests::{CreateTaskRequest, TaskFilterRequest, UpdateTaskRequest};
pub use task_service::TaskService;
pub use user_service::UserService;
