//! libSQL user store — point lookup only; user lifecycle is out of scope.

use std::sync::Arc;

use async_trait::async_trait;

use taskboard_core::entities::User;

use crate::TaskDb;
use crate::contract::UserStore;
use crate::error::StoreError;

/// User store backed by libSQL.
pub struct LibsqlUserStore {
    db: Arc<TaskDb>,
}

impl LibsqlUserStore {
    #[must_use]
    pub fn new(db: Arc<TaskDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for LibsqlUserStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut rows = self
            .db
            .conn()
            .query("SELECT id, name, email FROM users WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
            })),
            None => Ok(None),
        }
    }
}
