//! Shared application state for the Axum API server.

use std::sync::Arc;

use fleetinfo_common::types::ApplicationInfo;

use crate::contributor::{ApplicationInfoContributor, InfoContributor};

/// Application state shared across all route handlers via Axum `State`.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<ApplicationInfo>,
    pub contributors: Arc<Vec<Box<dyn InfoContributor>>>,
}

impl AppState {
    /// State publishing `info` through an [`ApplicationInfoContributor`].
    pub fn new(info: ApplicationInfo) -> Self {
        Self::with_contributors(
            info.clone(),
            vec![Box::new(ApplicationInfoContributor::new(info)) as Box<dyn InfoContributor>],
        )
    }

    pub fn with_contributors(
        info: ApplicationInfo,
        contributors: Vec<Box<dyn InfoContributor>>,
    ) -> Self {
        Self {
            info: Arc::new(info),
            contributors: Arc::new(contributors),
        }
    }
}
