use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use shared::models::Poll;
use tracing::error;

/// Handle to one stored poll. Votes are applied through it under the poll's own lock.
pub type SharedPoll = Arc<Mutex<Poll>>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("poll store lock poisoned")]
    StoreLockFailed,
    #[error("poll lock poisoned")]
    PollLockFailed,
}

#[derive(Debug, Default)]
pub struct PollStore {
    polls: RwLock<HashMap<String, SharedPoll>>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a freshly created poll under its own id. Ids come from
    /// `generate_poll_id`, so no existence check is made.
    pub fn put(&self, poll: Poll) -> Result<SharedPoll, StoreError> {
        let mut polls = self.polls.write().map_err(|_| {
            error!("Failed to acquire write lock for poll store");
            StoreError::StoreLockFailed
        })?;
        let id = poll.id().to_string();
        let shared = Arc::new(Mutex::new(poll));
        polls.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    pub fn get(&self, id: &str) -> Result<Option<SharedPoll>, StoreError> {
        let polls = self.polls.read().map_err(|_| {
            error!("Failed to acquire read lock for poll store");
            StoreError::StoreLockFailed
        })?;
        Ok(polls.get(id).cloned())
    }

    pub(crate) fn len(&self) -> Result<usize, StoreError> {
        self.polls
            .read()
            .map(|polls| polls.len())
            .map_err(|_| StoreError::StoreLockFailed)
    }
}

pub fn lock_poll(poll: &SharedPoll) -> Result<MutexGuard<'_, Poll>, StoreError> {
    poll.lock().map_err(|_| {
        error!("Failed to acquire lock for poll");
        StoreError::PollLockFailed
    })
}
