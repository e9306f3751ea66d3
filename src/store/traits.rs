//! Collaborator traits for profile persistence and the benefit catalog.

use async_trait::async_trait;

use crate::error::Result;
use crate::registry::{Benefit, CityId, UserId, UserProfile};

/// Persists and retrieves user profiles.
///
/// `save` is a full replace of the stored profile. Callers that need a
/// read-modify-write to be atomic hold the per-user lock around both calls.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the stored profile, or `None` if no profile has this id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>>;

    /// Replaces the stored profile with `profile`.
    async fn save(&self, profile: UserProfile) -> Result<()>;
}

/// Read-only source of candidate benefits.
#[async_trait]
pub trait BenefitCatalog: Send + Sync {
    /// Lists benefits with at least one city, institution and criterion.
    ///
    /// When `city` is given, only benefits offered in that city are listed.
    async fn list_fully_defined(&self, city: Option<CityId>) -> Result<Vec<Benefit>>;
}
