//! Shared test doubles for service unit tests.

#[cfg(test)]
pub(crate) mod fakes {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use taskboard_core::entities::{Task, TaskWithAssignee, User};
    use taskboard_core::filter::{SortDirection, SortField, TaskFilter};
    use taskboard_store::contract::{TaskStore, UserStore};
    use taskboard_store::error::StoreError;

    /// In-memory user store.
    #[derive(Default)]
    pub struct FakeUserStore {
        pub users: Mutex<HashMap<String, User>>,
    }

    impl FakeUserStore {
        pub fn with_user(id: &str, name: &str, email: &str) -> Self {
            let store = Self::default();
            store.users.lock().unwrap().insert(
                id.to_string(),
                User {
                    id: id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
            store
        }
    }

    #[async_trait]
    impl UserStore for FakeUserStore {
        async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
            Ok(self.users.lock().unwrap().get(id).cloned())
        }
    }

    /// In-memory task store honoring the same visibility, join, and CAS
    /// semantics as the libSQL adapter.
    #[derive(Default)]
    pub struct FakeTaskStore {
        pub tasks: Mutex<Vec<Task>>,
        /// Assignee data for join enrichment, keyed by user id.
        pub known_users: Mutex<HashMap<String, (String, String)>>,
        pub add_calls: AtomicUsize,
        pub update_calls: AtomicUsize,
        /// When set, every update fails as a lost CAS race.
        pub conflict_on_update: AtomicBool,
    }

    impl FakeTaskStore {
        /// Mirror a user store's entries for assignee enrichment.
        pub fn link_users(&self, users: &FakeUserStore) {
            let mut known = self.known_users.lock().unwrap();
            for (id, user) in users.users.lock().unwrap().iter() {
                known.insert(id.clone(), (user.name.clone(), user.email.clone()));
            }
        }

        fn enrich(&self, task: Task) -> TaskWithAssignee {
            let known = self.known_users.lock().unwrap();
            let assignee = task.user_id.as_ref().and_then(|id| known.get(id));
            TaskWithAssignee {
                assignee_name: assignee.map(|(name, _)| name.clone()),
                assignee_email: assignee.map(|(_, email)| email.clone()),
                task,
            }
        }

        fn visible(&self) -> Vec<Task> {
            self.tasks
                .lock()
                .unwrap()
                .iter()
                .filter(|t| !t.is_deleted)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl TaskStore for FakeTaskStore {
        async fn get_by_id(&self, id: &str) -> Result<Option<TaskWithAssignee>, StoreError> {
            Ok(self
                .visible()
                .into_iter()
                .find(|t| t.id == id)
                .map(|t| self.enrich(t)))
        }

        async fn get_all(&self) -> Result<Vec<TaskWithAssignee>, StoreError> {
            let mut tasks = self.visible();
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(tasks.into_iter().map(|t| self.enrich(t)).collect())
        }

        async fn add(&self, task: &Task) -> Result<(), StoreError> {
            self.add_calls.fetch_add(1, Ordering::SeqCst);
            self.tasks.lock().unwrap().push(task.clone());
            Ok(())
        }

        async fn update(&self, task: &Task) -> Result<(), StoreError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if self.conflict_on_update.load(Ordering::SeqCst) {
                return Err(StoreError::Conflict {
                    id: task.id.clone(),
                });
            }

            let mut tasks = self.tasks.lock().unwrap();
            let Some(stored) = tasks.iter_mut().find(|t| t.id == task.id && !t.is_deleted)
            else {
                return Err(StoreError::NoResult);
            };
            if stored.version != task.version {
                return Err(StoreError::Conflict {
                    id: task.id.clone(),
                });
            }
            *stored = Task {
                version: task.version + 1,
                ..task.clone()
            };
            Ok(())
        }

        async fn soft_delete(&self, id: &str) -> Result<(), StoreError> {
            let mut tasks = self.tasks.lock().unwrap();
            if let Some(stored) = tasks.iter_mut().find(|t| t.id == id && !t.is_deleted) {
                stored.is_deleted = true;
                stored.updated_at = Some(Utc::now());
                stored.version += 1;
            }
            Ok(())
        }

        async fn get_filtered(
            &self,
            filter: &TaskFilter,
        ) -> Result<(Vec<TaskWithAssignee>, u64), StoreError> {
            let mut matches: Vec<Task> = self
                .visible()
                .into_iter()
                .filter(|t| filter.status.is_none_or(|s| t.status == s))
                .filter(|t| {
                    filter
                        .user_id
                        .as_deref()
                        .is_none_or(|uid| t.user_id.as_deref() == Some(uid))
                })
                .collect();

            matches.sort_by(|a, b| {
                let ordering = match filter.sort_by {
                    SortField::Title => a.title.cmp(&b.title),
                    SortField::Deadline => a.deadline.cmp(&b.deadline),
                    SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                };
                match filter.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });

            let total = matches.len() as u64;
            let page: Vec<TaskWithAssignee> = matches
                .into_iter()
                .skip(usize::try_from(filter.offset()).unwrap_or(usize::MAX))
                .take(usize::try_from(filter.limit()).unwrap_or(usize::MAX))
                .map(|t| self.enrich(t))
                .collect();
            Ok((page, total))
        }

        async fn get_by_user(&self, user_id: &str) -> Result<Vec<TaskWithAssignee>, StoreError> {
            let mut tasks: Vec<Task> = self
                .visible()
                .into_iter()
                .filter(|t| t.user_id.as_deref() == Some(user_id))
                .collect();
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(tasks.into_iter().map(|t| self.enrich(t)).collect())
        }
    }
}
