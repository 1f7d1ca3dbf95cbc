//! libSQL task store — CRUD, soft delete, filtered listing.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use taskboard_core::entities::{Task, TaskWithAssignee};
use taskboard_core::filter::TaskFilter;

use crate::TaskDb;
use crate::contract::TaskStore;
use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};

const SELECT_COLS: &str = "t.id, t.title, t.description, t.status, t.created_at, t.updated_at, \
     t.deadline, t.user_id, t.is_deleted, t.version, u.name, u.email";

/// Build a SELECT over non-deleted tasks joined with their assignee.
///
/// This is the single SQL-building site for task reads: the soft-delete
/// predicate is part of the template, so no read path can skip it.
fn select_active(extra_where: &str, tail: &str) -> String {
    format!(
        "SELECT {SELECT_COLS} FROM tasks t \
         LEFT JOIN users u ON u.id = t.user_id \
         WHERE t.is_deleted = 0{extra_where} {tail}"
    )
}

fn count_active(extra_where: &str) -> String {
    format!("SELECT COUNT(*) FROM tasks t WHERE t.is_deleted = 0{extra_where}")
}

fn row_to_task(row: &libsql::Row) -> Result<TaskWithAssignee, StoreError> {
    Ok(TaskWithAssignee {
        task: Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: get_opt_string(row, 2)?,
            status: parse_enum(&row.get::<String>(3)?)?,
            created_at: parse_datetime(&row.get::<String>(4)?)?,
            updated_at: parse_optional_datetime(get_opt_string(row, 5)?.as_deref())?,
            deadline: parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
            user_id: get_opt_string(row, 7)?,
            is_deleted: row.get::<i64>(8)? != 0,
            version: row.get(9)?,
        },
        assignee_name: get_opt_string(row, 10)?,
        assignee_email: get_opt_string(row, 11)?,
    })
}

/// Task store backed by libSQL.
pub struct LibsqlTaskStore {
    db: Arc<TaskDb>,
}

impl LibsqlTaskStore {
    #[must_use]
    pub fn new(db: Arc<TaskDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskStore for LibsqlTaskStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<TaskWithAssignee>, StoreError> {
        let sql = select_active(" AND t.id = ?1", "");
        let mut rows = self.db.conn().query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<TaskWithAssignee>, StoreError> {
        let sql = select_active("", "ORDER BY t.created_at DESC, t.id ASC");
        let mut rows = self.db.conn().query(&sql, ()).await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    async fn add(&self, task: &Task) -> Result<(), StoreError> {
        self.db
            .conn()
            .execute(
                "INSERT INTO tasks (id, title, description, status, created_at, updated_at, \
                 deadline, user_id, is_deleted, version) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                libsql::params![
                    task.id.as_str(),
                    task.title.as_str(),
                    task.description.as_deref(),
                    task.status.as_str(),
                    task.created_at.to_rfc3339(),
                    task.updated_at
                        .map_or(libsql::Value::Null, |dt| dt.to_rfc3339().into()),
                    task.deadline
                        .map_or(libsql::Value::Null, |dt| dt.to_rfc3339().into()),
                    task.user_id.as_deref(),
                    i64::from(task.is_deleted),
                    task.version
                ],
            )
            .await?;
        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), StoreError> {
        // Compare-and-swap on the version column: the WHERE clause only
        // matches if nobody wrote the row since this task was read, and the
        // version bump happens in the same atomic statement.
        let affected = self
            .db
            .conn()
            .execute(
                "UPDATE tasks SET title = ?1, description = ?2, status = ?3, deadline = ?4, \
                 user_id = ?5, updated_at = ?6, version = version + 1 \
                 WHERE id = ?7 AND version = ?8 AND is_deleted = 0",
                libsql::params![
                    task.title.as_str(),
                    task.description.as_deref(),
                    task.status.as_str(),
                    task.deadline
                        .map_or(libsql::Value::Null, |dt| dt.to_rfc3339().into()),
                    task.user_id.as_deref(),
                    task.updated_at
                        .map_or(libsql::Value::Null, |dt| dt.to_rfc3339().into()),
                    task.id.as_str(),
                    task.version
                ],
            )
            .await?;

        if affected == 0 {
            // Distinguish a lost race from a vanished row.
            let mut rows = self
                .db
                .conn()
                .query(
                    "SELECT 1 FROM tasks WHERE id = ?1 AND is_deleted = 0",
                    [task.id.as_str()],
                )
                .await?;
            return match rows.next().await? {
                Some(_) => Err(StoreError::Conflict {
                    id: task.id.clone(),
                }),
                None => Err(StoreError::NoResult),
            };
        }
        Ok(())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), StoreError> {
        let now = Utc::now();
        self.db
            .conn()
            .execute(
                "UPDATE tasks SET is_deleted = 1, updated_at = ?1, version = version + 1 \
                 WHERE id = ?2 AND is_deleted = 0",
                libsql::params![now.to_rfc3339(), id],
            )
            .await?;
        Ok(())
    }

    async fn get_filtered(
        &self,
        filter: &TaskFilter,
    ) -> Result<(Vec<TaskWithAssignee>, u64), StoreError> {
        let mut conditions = String::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(status) = filter.status {
            params.push(libsql::Value::Text(status.as_str().to_string()));
            conditions.push_str(&format!(" AND t.status = ?{}", params.len()));
        }
        if let Some(ref user_id) = filter.user_id {
            params.push(libsql::Value::Text(user_id.clone()));
            conditions.push_str(&format!(" AND t.user_id = ?{}", params.len()));
        }

        // Total count over the filtered-but-unpaged set. Separate query from
        // the page read, with no shared snapshot: count and page can disagree
        // slightly under concurrent writers.
        let count_sql = count_active(&conditions);
        let mut rows = self
            .db
            .conn()
            .query(&count_sql, libsql::params_from_iter(params.clone()))
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let total = u64::try_from(row.get::<i64>(0)?).unwrap_or(0);

        let tail = format!(
            "ORDER BY t.{} {}, t.id ASC LIMIT {} OFFSET {}",
            filter.sort_by.column(),
            filter.direction.as_sql(),
            filter.limit(),
            filter.offset()
        );
        let page_sql = select_active(&conditions, &tail);
        let mut rows = self
            .db
            .conn()
            .query(&page_sql, libsql::params_from_iter(params))
            .await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok((tasks, total))
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<TaskWithAssignee>, StoreError> {
        let sql = select_active(" AND t.user_id = ?1", "ORDER BY t.created_at DESC, t.id ASC");
        let mut rows = self.db.conn().query(&sql, [user_id]).await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }
}
