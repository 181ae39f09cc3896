//! FleetInfo API — health and info endpoints for the running application.
//!
//! Endpoints:
//! - GET /health — Liveness check
//! - GET /actuator/info — Application name, version, fleet and build date

pub mod contributor;
pub mod routes;
pub mod state;
