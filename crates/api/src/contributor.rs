//! Info contributors — pieces of metadata merged into `/actuator/info`.

use fleetinfo_common::types::ApplicationInfo;
use serde_json::{Map, Value};

/// Collects details from every contributor into one JSON object.
#[derive(Debug, Default)]
pub struct InfoBuilder {
    details: Map<String, Value>,
}

impl InfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge several details at once. Existing keys are overwritten.
    pub fn with_details(&mut self, details: Map<String, Value>) -> &mut Self {
        self.details.extend(details);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.details)
    }
}

/// Something that can add details to the info endpoint.
pub trait InfoContributor: Send + Sync {
    fn contribute(&self, builder: &mut InfoBuilder);
}

/// Publishes [`ApplicationInfo`] as top-level info details:
/// `applicationName`, `version`, `fleet` and `buildDate`.
#[derive(Debug, Clone)]
pub struct ApplicationInfoContributor {
    info: ApplicationInfo,
}

impl ApplicationInfoContributor {
    pub fn new(info: ApplicationInfo) -> Self {
        Self { info }
    }
}

impl InfoContributor for ApplicationInfoContributor {
    fn contribute(&self, builder: &mut InfoBuilder) {
        match serde_json::to_value(&self.info) {
            Ok(Value::Object(details)) => {
                builder.with_details(details);
            }
            Ok(other) => {
                tracing::error!(value = %other, "Application info did not serialize to an object");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize application info");
            }
        }
    }
}
