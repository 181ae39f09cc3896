use serde::Serialize;

/// Placeholder for any value that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Build and environment metadata describing the running application.
///
/// Every field is always populated. Values that could not be determined
/// carry [`UNKNOWN`] instead of being absent. Serializes with the keys
/// published on the info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationInfo {
    /// The fleet / deployment environment
    fleet: String,
    /// Human-readable application name
    #[serde(rename = "applicationName")]
    app_name: String,
    /// Version identifier
    #[serde(rename = "version")]
    app_version: String,
    /// Build timestamp, kept as an opaque string
    #[serde(rename = "buildDate")]
    build_date: String,
}

impl ApplicationInfo {
    pub fn new(
        fleet: impl Into<String>,
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        build_date: impl Into<String>,
    ) -> Self {
        Self {
            fleet: fleet.into(),
            app_name: app_name.into(),
            app_version: app_version.into(),
            build_date: build_date.into(),
        }
    }

    /// A record with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, UNKNOWN, UNKNOWN)
    }

    pub fn fleet(&self) -> &str {
        &self.fleet
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    /// True when no field carries real data.
    pub fn is_unknown(&self) -> bool {
        [
            &self.fleet,
            &self.app_name,
            &self.app_version,
            &self.build_date,
        ]
        .iter()
        .all(|v| v.as_str() == UNKNOWN)
    }
}

impl std::fmt::Display for ApplicationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (built {}) [fleet: {}]",
            self.app_name, self.app_version, self.build_date, self.fleet
        )
    }
}
