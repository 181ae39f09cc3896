use std::net::SocketAddr;

use serde::Deserialize;

/// Resource locator baked in at build time, used when `CODE_UNIT_LOCATION` is unset.
const BUILD_CODE_UNIT_LOCATION: Option<&str> = option_env!("FLEETINFO_CODE_UNIT_LOCATION");

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the info server binds to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Resource locator of the packaged artifact, e.g.
    /// `jar:file:/opt/app/app.jar!/com/example/Main.class`
    pub code_unit_location: String,

    /// Log output format (default: text)
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("BIND_ADDR must be a valid socket address"))?,
            code_unit_location: code_unit_location(std::env::var("CODE_UNIT_LOCATION").ok())?,
            log_format: std::env::var("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or(LogFormat::Text),
        })
    }
}

/// The configured locator, or the default when it is unset or blank.
fn code_unit_location(configured: Option<String>) -> anyhow::Result<String> {
    match configured {
        Some(location) if !location.trim().is_empty() => Ok(location),
        _ => default_code_unit_location(),
    }
}

/// Build-time locator if one was injected, otherwise the running executable.
///
/// A bare executable is not an archive, so the extractor reports it as unpackaged.
fn default_code_unit_location() -> anyhow::Result<String> {
    if let Some(location) = BUILD_CODE_UNIT_LOCATION {
        return Ok(location.to_string());
    }
    let exe = std::env::current_exe()
        .map_err(|e| anyhow::anyhow!("Unable to determine current executable: {}", e))?;
    Ok(format!("file:{}", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
    }

    #[test]
    fn test_configured_code_unit_location_is_used() {
        let location =
            code_unit_location(Some("jar:file:/opt/app.jar!/Main.class".to_string())).unwrap();
        assert_eq!(location, "jar:file:/opt/app.jar!/Main.class");
    }

    #[test]
    fn test_blank_code_unit_location_falls_back_to_default() {
        let default = default_code_unit_location().unwrap();
        assert_eq!(code_unit_location(Some(String::new())).unwrap(), default);
        assert_eq!(code_unit_location(Some("   ".to_string())).unwrap(), default);
        assert_eq!(code_unit_location(None).unwrap(), default);
    }

    #[test]
    fn test_default_code_unit_location_is_non_empty() {
        let location = default_code_unit_location().unwrap();
        assert!(!location.is_empty());
    }
}
