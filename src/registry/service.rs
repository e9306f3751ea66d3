//! Profile Service
//!
//! Registration and criteria edits. Every criteria or city change clears
//! the eligibility cache's freshness flag in the same write.

use std::sync::Arc;

use tracing::info;

use super::ids::UserId;
use super::profile::{NewProfile, ProfileUpdate, UserProfile};
use crate::clock::Clock;
use crate::error::{EligibilityError, Result};
use crate::locks::UserLocks;
use crate::store::ProfileStore;

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    locks: Arc<UserLocks>,
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    /// `locks` must be the same instance the eligibility cache uses.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        locks: Arc<UserLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profiles,
            locks,
            clock,
        }
    }

    // == Register ==
    /// Creates a profile in the miss state.
    ///
    /// Rejects an id that is already taken and birth dates in the future.
    pub async fn register(&self, new: NewProfile) -> Result<UserProfile> {
        let _guard = self.locks.lock(new.id).await;
        let now = self.clock.now();

        let today = now.date_naive();
        if let Some(future) = std::iter::once(&new.birth_date)
            .chain(new.child_birth_dates.iter())
            .find(|date| **date > today)
        {
            return Err(EligibilityError::InvalidRequest(format!(
                "Birth date {} is in the future",
                future
            )));
        }

        if self.profiles.find_by_id(new.id).await?.is_some() {
            return Err(EligibilityError::InvalidRequest(format!(
                "Profile {} already exists",
                new.id
            )));
        }

        let profile = UserProfile::register(new, now);
        self.profiles.save(profile.clone()).await?;

        info!(user_id = %profile.id, "Profile registered");
        Ok(profile)
    }

    // == Update Criteria ==
    /// Replaces the selected criteria and city, invalidating the cached
    /// benefit set and restamping the selection date.
    pub async fn update_criteria(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<UserProfile> {
        let _guard = self.locks.lock(user_id).await;

        let profile = self
            .profiles
            .find_by_id(user_id)
            .await?
            .ok_or(EligibilityError::NotFound(user_id))?;

        let profile = profile.with_criteria(update, self.clock.now());
        self.profiles.save(profile.clone()).await?;

        info!(
            %user_id,
            criteria = profile.selected_criteria.len(),
            "Criteria updated, eligibility invalidated"
        );
        Ok(profile)
    }
}
