//! Fleet resolver — works out which deployment environment the process runs in.
//!
//! Sources, in priority order:
//! 1. The `spring.profiles.active` process property
//! 2. The `FLEET` environment variable
//! 3. The default, `dev`
//!
//! The resolved value is written back to the property so every later reader
//! sees the same fleet without resolving again. Resolution is meant to run
//! once during startup.

use fleetinfo_common::properties::Properties;

/// Process property holding the current fleet.
pub const PROP_FLEET: &str = "spring.profiles.active";

/// Environment variable holding the current fleet.
pub const ENV_FLEET: &str = "FLEET";

/// Fleet used when no source provides one.
pub const DEFAULT_FLEET: &str = "dev";

/// Recognised fleet values. Resolution does not enforce this set.
pub const FLEET_VALUES: [&str; 4] = ["local", "dev", "test", "prod"];

/// Whether `fleet` is one of [`FLEET_VALUES`].
pub fn is_known_fleet(fleet: &str) -> bool {
    FLEET_VALUES.contains(&fleet)
}

/// Resolve the fleet from `props` and the process environment.
pub fn resolve_fleet(props: &mut Properties) -> String {
    resolve_fleet_with(props, |key| std::env::var(key).ok())
}

/// Resolve the fleet using `lookup` for environment variables.
///
/// The environment is only consulted when the property is absent; a property
/// that is present but blank still counts and ends up at the default.
pub fn resolve_fleet_with<F>(props: &mut Properties, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let candidate = match props.get(PROP_FLEET) {
        Some(value) => Some(value.to_string()),
        None => lookup(ENV_FLEET),
    };

    let fleet = match candidate {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::info!(
                env = ENV_FLEET,
                property = PROP_FLEET,
                default = DEFAULT_FLEET,
                "Env var [FLEET] and property [spring.profiles.active] not found, using default fleet"
            );
            DEFAULT_FLEET.to_string()
        }
    };

    if !is_known_fleet(&fleet) {
        tracing::warn!(fleet = %fleet, allowed = ?FLEET_VALUES, "Fleet is not a recognised value");
    }

    tracing::info!("Starting application using fleet: [{}]", fleet);
    props.set(PROP_FLEET, fleet.clone());
    fleet
}
