//! JSON seed loading for the in-memory stores.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::memory::{InMemoryBenefitCatalog, InMemoryProfileStore};
use crate::registry::{Benefit, NewProfile, UserProfile};

/// Seeded profile. Profiles always start in the miss state; the selection
/// date defaults to load time.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProfile {
    #[serde(flatten)]
    pub profile: NewProfile,
    #[serde(default)]
    pub date_criteria_selected: Option<DateTime<Utc>>,
}

/// Contents of a seed file: `{"profiles": [...], "benefits": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub profiles: Vec<SeedProfile>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
}

impl SeedData {
    /// Reads and parses a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))
    }

    /// Builds the in-memory stores, stamping undated profiles with `now`.
    pub fn into_stores(self, now: DateTime<Utc>) -> (InMemoryProfileStore, InMemoryBenefitCatalog) {
        let profiles = self.profiles.into_iter().map(|seed| {
            UserProfile::register(seed.profile, seed.date_criteria_selected.unwrap_or(now))
        });
        (
            InMemoryProfileStore::with_profiles(profiles),
            InMemoryBenefitCatalog::new(self.benefits),
        )
    }
}
