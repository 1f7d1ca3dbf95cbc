//! Entity structs for the Taskboard domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema generation.

mod task;
mod user;

pub use task::{Task, TaskWithAssignee};
pub use user::User;
