//! Per-user exclusion
//!
//! Serializes cache recomputation and criteria edits for the same user.
//! Different users never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::registry::UserId;

/// One async mutex per user id, present only while someone holds or
/// waits for it.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

/// Exclusive access to one user's profile. Releasing the last holder
/// removes the user's entry from the map.
#[derive(Debug)]
pub struct UserLockGuard<'a> {
    owner: &'a UserLocks,
    user_id: UserId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for UserLockGuard<'_> {
    fn drop(&mut self) {
        // Release the mutex first so its Arc no longer counts.
        self.guard.take();
        self.owner
            .locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `user_id`'s profile.
    ///
    /// The guard must be held across the whole read-modify-write.
    pub async fn lock(&self, user_id: UserId) -> UserLockGuard<'_> {
        // Clone the Arc out so the map shard is not held across the await.
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        UserLockGuard {
            owner: self,
            user_id,
            guard: Some(guard),
        }
    }

    /// Number of users currently locked or waited on.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
