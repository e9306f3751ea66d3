//! API Module
//!
//! HTTP handlers and routing for the registry REST API.
//!
//! # Endpoints
//! - `POST /users` - Register a profile
//! - `GET /users/:id/benefits` - Eligible benefits for a user
//! - `PUT /users/:id/criteria` - Replace a user's criteria and city
//! - `GET /stats` - Eligibility cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
