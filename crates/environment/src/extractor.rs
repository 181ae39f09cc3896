//! Manifest metadata extractor.
//!
//! Builds an [`ApplicationInfo`] from the manifest of the archive a code unit
//! was loaded from. Extraction never fails: code that is not packaged, or an
//! archive whose manifest cannot be read, yields the all-unknown record.

use std::fs::File;
use std::io::BufReader;

use fleetinfo_common::error::AppError;
use fleetinfo_common::properties::Properties;
use fleetinfo_common::types::{ApplicationInfo, UNKNOWN};
use zip::ZipArchive;

use crate::fleet::PROP_FLEET;
use crate::locator::{ArchiveLocator, MANIFEST_ENTRY};
use crate::manifest::{KEY_APP_NAME, KEY_APP_VERSION, KEY_BUILD_DATE, Manifest};

/// A loaded unit of code and the resource locator it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeUnit {
    name: String,
    locator: String,
}

impl CodeUnit {
    /// Blank names or locators are caller bugs and are rejected immediately.
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        let locator = locator.into();
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Argument: \"name\" cannot be blank".to_string(),
            ));
        }
        if locator.trim().is_empty() {
            return Err(AppError::Validation(
                "Argument: \"locator\" cannot be blank".to_string(),
            ));
        }
        Ok(Self { name, locator })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

impl std::fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.locator)
    }
}

/// Reads application metadata out of packaged archives.
#[derive(Debug, Default)]
pub struct ManifestExtractor;

impl ManifestExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract application info for `unit`.
    ///
    /// The fleet comes from the already-resolved `spring.profiles.active`
    /// property in `props`, or `unknown` if resolution never ran.
    pub fn extract(&self, unit: &CodeUnit, props: &Properties) -> ApplicationInfo {
        if !ArchiveLocator::is_archive_resource(unit.locator()) {
            tracing::error!(
                code_unit = %unit.name(),
                locator = %unit.locator(),
                "Code unit does not appear to be from an archive, unable to load manifest"
            );
            return ApplicationInfo::unknown();
        }

        let archive = match ArchiveLocator::from_resource(unit.locator()) {
            Ok(archive) => archive,
            Err(e) => {
                tracing::error!(
                    code_unit = %unit.name(),
                    locator = %unit.locator(),
                    error = %e,
                    "Unable to derive archive from code unit locator"
                );
                return ApplicationInfo::unknown();
            }
        };

        let manifest = match Self::read_manifest(&archive) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!(
                    code_unit = %unit.name(),
                    locator = %unit.locator(),
                    manifest = %archive.manifest_locator(),
                    archive_path = %archive.archive_path().display(),
                    error = %e,
                    "Error while reading archive manifest"
                );
                return ApplicationInfo::unknown();
            }
        };

        let attrs = manifest.main_attributes();
        let info = ApplicationInfo::new(
            props.get_or(PROP_FLEET, UNKNOWN),
            attrs.get(KEY_APP_NAME).unwrap_or(UNKNOWN),
            attrs.get(KEY_APP_VERSION).unwrap_or(UNKNOWN),
            attrs.get(KEY_BUILD_DATE).unwrap_or(UNKNOWN),
        );

        tracing::debug!(
            code_unit = %unit.name(),
            manifest = %archive.manifest_locator(),
            app_name = info.app_name(),
            app_version = info.app_version(),
            "Loaded application info from archive manifest"
        );

        info
    }

    fn read_manifest(archive: &ArchiveLocator) -> Result<Manifest, AppError> {
        let file = File::open(archive.archive_path())?;
        let mut zip = ZipArchive::new(BufReader::new(file))?;
        let entry = zip.by_name(MANIFEST_ENTRY)?;
        Manifest::from_reader(entry)
    }
}

/// Extract application info for `unit` with a default extractor.
pub fn extract_application_info(unit: &CodeUnit, props: &Properties) -> ApplicationInfo {
    ManifestExtractor::new().extract(unit, props)
}
