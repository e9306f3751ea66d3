//! Eligibility Cache Module
//!
//! Answers "which benefits does this user qualify for" from the profile's
//! cached set when it is fresh, recomputing and persisting it otherwise.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::matcher::eligible_benefits;
use super::staleness::check_profile;
use super::stats::EligibilityStats;
use crate::clock::Clock;
use crate::error::{EligibilityError, Result};
use crate::locks::UserLocks;
use crate::registry::{BenefitId, UserId};
use crate::store::{BenefitCatalog, ProfileStore};

// == Cache Outcome ==
/// How a successful read was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Served the profile's cached set, no catalog access and no write
    Hit,
    /// Recomputed from the catalog and saved the profile
    Miss,
}

/// Result of an eligibility read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityRead {
    pub benefit_ids: BTreeSet<BenefitId>,
    pub outcome: CacheOutcome,
}

impl EligibilityRead {
    pub fn is_hit(&self) -> bool {
        self.outcome == CacheOutcome::Hit
    }
}

// == Eligibility Cache ==
/// Per-user eligible-benefit cache stored on the profile itself.
///
/// The only writer of `freshness_flag = true` and `cached_benefit_ids`.
/// Never clears the flag; criteria edits do that.
pub struct EligibilityCache {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn BenefitCatalog>,
    locks: Arc<UserLocks>,
    clock: Arc<dyn Clock>,
    stats: Mutex<EligibilityStats>,
}

impl EligibilityCache {
    // == Constructor ==
    /// Creates a cache over the given collaborators.
    ///
    /// `locks` must be shared with every writer of the same profiles.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn BenefitCatalog>,
        locks: Arc<UserLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profiles,
            catalog,
            locks,
            clock,
            stats: Mutex::new(EligibilityStats::new()),
        }
    }

    // == Get Eligible Benefits ==
    /// Returns the ids of the benefits `user_id` qualifies for.
    ///
    /// Fails with `NotFound` for an unknown user and `Stale` when a
    /// birthday passed after the criteria were chosen.
    pub async fn get_eligible_benefits(&self, user_id: UserId) -> Result<BTreeSet<BenefitId>> {
        Ok(self.read(user_id).await?.benefit_ids)
    }

    // == Read ==
    /// Same as `get_eligible_benefits`, also reporting hit or miss.
    pub async fn read(&self, user_id: UserId) -> Result<EligibilityRead> {
        let _guard = self.locks.lock(user_id).await;

        let profile = match self.profiles.find_by_id(user_id).await? {
            Some(profile) => profile,
            None => {
                self.record(EligibilityStats::record_not_found);
                return Err(EligibilityError::NotFound(user_id));
            }
        };

        let today = self.clock.now().date_naive();
        if let Err(err) = check_profile(&profile, today) {
            self.record(EligibilityStats::record_stale);
            warn!(%user_id, error = %err, "Refusing eligibility read");
            return Err(err);
        }

        if let Some(cached) = profile.cached_benefits() {
            self.record(EligibilityStats::record_hit);
            debug!(%user_id, benefits = cached.len(), "Eligibility cache hit");
            return Ok(EligibilityRead {
                benefit_ids: cached.clone(),
                outcome: CacheOutcome::Hit,
            });
        }

        let catalog = self.catalog.list_fully_defined(profile.city_id).await?;
        let benefit_ids = eligible_benefits(&profile.selected_criteria, profile.city_id, &catalog);

        self.profiles
            .save(profile.with_cached_benefits(benefit_ids.clone()))
            .await?;

        self.record(EligibilityStats::record_miss);
        info!(
            %user_id,
            candidates = catalog.len(),
            benefits = benefit_ids.len(),
            "Eligibility recomputed"
        );

        Ok(EligibilityRead {
            benefit_ids,
            outcome: CacheOutcome::Miss,
        })
    }

    // == Stats ==
    /// Returns a snapshot of the read counters.
    pub fn stats(&self) -> EligibilityStats {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, update: fn(&mut EligibilityStats)) {
        update(&mut self.stats.lock().unwrap_or_else(PoisonError::into_inner));
    }
}
