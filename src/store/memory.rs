//! In-memory collaborators
//!
//! HashMap-backed profile store and a catalog that indexes fully defined
//! benefits once at construction.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{BenefitCatalog, ProfileStore};
use crate::error::Result;
use crate::registry::{Benefit, CityId, UserId, UserProfile};

// == Profile Store ==
/// Profile store holding full profile snapshots keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `profiles`.
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Returns the number of stored profiles.
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn save(&self, profile: UserProfile) -> Result<()> {
        self.profiles.write().await.insert(profile.id, profile);
        Ok(())
    }
}

// == Benefit Catalog ==
/// Catalog keeping only fully defined benefits, ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryBenefitCatalog {
    benefits: Vec<Benefit>,
}

impl InMemoryBenefitCatalog {
    /// Builds the catalog, dropping benefits that are not fully defined.
    pub fn new(benefits: impl IntoIterator<Item = Benefit>) -> Self {
        let mut kept: Vec<Benefit> = Vec::new();
        let mut skipped = 0usize;
        for benefit in benefits {
            if benefit.is_fully_defined() {
                kept.push(benefit);
            } else {
                skipped += 1;
            }
        }
        kept.sort_by_key(|benefit| benefit.id);

        debug!(
            kept = kept.len(),
            skipped, "Benefit catalog indexed fully defined benefits"
        );
        Self { benefits: kept }
    }

    /// Number of fully defined benefits held.
    pub fn len(&self) -> usize {
        self.benefits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benefits.is_empty()
    }
}

#[async_trait]
impl BenefitCatalog for InMemoryBenefitCatalog {
    async fn list_fully_defined(&self, city: Option<CityId>) -> Result<Vec<Benefit>> {
        Ok(self
            .benefits
            .iter()
            .filter(|benefit| benefit.is_offered_in(city))
            .cloned()
            .collect())
    }
}
