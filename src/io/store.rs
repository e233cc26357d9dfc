use crate::model::task::{StoredTask, Task};

/// Error type for store operations.
///
/// Any store failure aborts the current pass wholesale: a partial snapshot
/// would produce a misleading plan or timeline. The next trigger retries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("not signed in")]
    Unauthenticated,
}

/// The synced task collection, owned by the surrounding app.
///
/// The engine only ever reads snapshots and, in the clone case, requests
/// creation of exactly one new task. All other task mutation lives in the
/// CRUD layer outside this crate.
pub trait TaskStore {
    /// Fetch the live task set for a user as an immutable snapshot
    fn fetch_active_tasks(&self, user_id: &str) -> Result<Vec<StoredTask>, StoreError>;

    /// Persist a new task and return its store-assigned id
    fn create_task(&self, user_id: &str, task: Task) -> Result<String, StoreError>;
}
