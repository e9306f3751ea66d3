//! API Handlers
//!
//! HTTP request handlers for each registry endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::eligibility::EligibilityCache;
use crate::error::{EligibilityError, Result};
use crate::locks::UserLocks;
use crate::models::{
    EligibleBenefitsResponse, HealthResponse, ProfileResponse, RegisterProfileRequest,
    StatsResponse, UpdateCriteriaRequest,
};
use crate::registry::{ProfileService, UserId};
use crate::store::{
    BenefitCatalog, InMemoryBenefitCatalog, InMemoryProfileStore, ProfileStore, SeedData,
};

/// Application state shared across all handlers.
///
/// The eligibility cache and the profile service share one set of
/// per-user locks.
#[derive(Clone)]
pub struct AppState {
    pub eligibility: Arc<EligibilityCache>,
    pub profiles: Arc<ProfileService>,
}

impl AppState {
    /// Wires the cache and profile service over the given collaborators.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn BenefitCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let locks = Arc::new(UserLocks::new());
        Self {
            eligibility: Arc::new(EligibilityCache::new(
                profiles.clone(),
                catalog,
                locks.clone(),
                clock.clone(),
            )),
            profiles: Arc::new(ProfileService::new(profiles, locks, clock)),
        }
    }

    /// Creates in-memory stores, seeded from `SEED_FILE` when configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let (profiles, catalog) = match &config.seed_file {
            Some(path) => SeedData::from_path(path)?.into_stores(Utc::now()),
            None => (
                InMemoryProfileStore::new(),
                InMemoryBenefitCatalog::default(),
            ),
        };
        Ok(Self::new(
            Arc::new(profiles),
            Arc::new(catalog),
            Arc::new(SystemClock),
        ))
    }
}

/// Handler for GET /users/:id/benefits
pub async fn benefits_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<EligibleBenefitsResponse>> {
    let user_id = UserId(id);
    let read = state.eligibility.read(user_id).await?;

    Ok(Json(EligibleBenefitsResponse::new(user_id, read)))
}

/// Handler for POST /users
pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(EligibilityError::InvalidRequest(error_msg));
    }

    let profile = state.profiles.register(req.into_new_profile()).await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::registered(&profile))))
}

/// Handler for PUT /users/:id/criteria
///
/// Replaces criteria and city together; the body must name `city_id`.
pub async fn update_criteria_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateCriteriaRequest>,
) -> Result<Json<ProfileResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(EligibilityError::InvalidRequest(error_msg));
    }

    let profile = state
        .profiles
        .update_criteria(UserId(id), req.into_update())
        .await?;

    Ok(Json(ProfileResponse::updated(&profile)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.eligibility.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
