//! Resource locators for code loaded out of a packaged archive.
//!
//! A class packaged in a JAR has a locator of the form
//! `jar:file:/opt/app/app.jar!/com/example/Main.class`: the `jar:` scheme,
//! the URL of the archive, the `!` separator, then the entry path inside
//! the archive.

use std::path::PathBuf;

use fleetinfo_common::error::AppError;
use url::Url;

/// Scheme prefix marking a resource loaded from inside an archive.
pub const ARCHIVE_SCHEME: &str = "jar:";

/// Separator between the archive URL and the entry path.
pub const ARCHIVE_SEPARATOR: char = '!';

/// Location of the manifest inside an archive.
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// An archive resolved from a packaged resource locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLocator {
    /// Archive root locator, including the trailing separator
    root: String,
    /// Filesystem path of the archive
    path: PathBuf,
}

impl ArchiveLocator {
    /// Whether `resource` points inside an archive at all.
    pub fn is_archive_resource(resource: &str) -> bool {
        resource.starts_with(ARCHIVE_SCHEME)
    }

    /// Derive the containing archive from a packaged resource locator.
    ///
    /// Fails when the locator has no archive scheme or separator, or when the
    /// archive itself is not a local `file:` URL.
    pub fn from_resource(resource: &str) -> Result<Self, AppError> {
        let inner = resource.strip_prefix(ARCHIVE_SCHEME).ok_or_else(|| {
            AppError::Validation(format!("Locator is not an archive resource: {}", resource))
        })?;

        let sep = inner.find(ARCHIVE_SEPARATOR).ok_or_else(|| {
            AppError::Validation(format!("Locator has no archive separator: {}", resource))
        })?;
        let archive_url = &inner[..sep];

        let url = Url::parse(archive_url)
            .map_err(|e| AppError::Validation(format!("Invalid archive URL {}: {}", archive_url, e)))?;
        if url.scheme() != "file" {
            return Err(AppError::Validation(format!(
                "Archive is not a local file: {}",
                archive_url
            )));
        }
        let path = url.to_file_path().map_err(|_| {
            AppError::Validation(format!("Archive URL has no file path: {}", archive_url))
        })?;

        Ok(Self {
            root: resource[..ARCHIVE_SCHEME.len() + sep + 1].to_string(),
            path,
        })
    }

    /// Locator of the manifest, e.g. `jar:file:/opt/app/app.jar!/META-INF/MANIFEST.MF`.
    pub fn manifest_locator(&self) -> String {
        format!("{}/{}", self.root, MANIFEST_ENTRY)
    }

    /// Filesystem path of the archive.
    pub fn archive_path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_archive_resource() {
        assert!(ArchiveLocator::is_archive_resource(
            "jar:file:/opt/app.jar!/Main.class"
        ));
        assert!(!ArchiveLocator::is_archive_resource(
            "file:/workspace/target/classes/Main.class"
        ));
        assert!(!ArchiveLocator::is_archive_resource(""));
    }

    #[test]
    fn test_derives_root_and_manifest() {
        let locator =
            ArchiveLocator::from_resource("jar:file:/opt/app/app.jar!/com/example/Main.class")
                .unwrap();
        assert_eq!(
            locator.manifest_locator(),
            "jar:file:/opt/app/app.jar!/META-INF/MANIFEST.MF"
        );
        assert_eq!(locator.archive_path(), std::path::Path::new("/opt/app/app.jar"));
    }

    #[test]
    fn test_truncates_at_first_separator() {
        // Nested archives: only the outermost one is used
        let locator =
            ArchiveLocator::from_resource("jar:file:/opt/app.jar!/BOOT-INF/lib/dep.jar!/A.class")
                .unwrap();
        assert_eq!(
            locator.manifest_locator(),
            "jar:file:/opt/app.jar!/META-INF/MANIFEST.MF"
        );
        assert_eq!(locator.archive_path(), std::path::Path::new("/opt/app.jar"));
    }

    #[test]
    fn test_percent_encoded_path_is_decoded() {
        let locator =
            ArchiveLocator::from_resource("jar:file:/opt/my%20app/app.jar!/Main.class").unwrap();
        assert_eq!(
            locator.archive_path(),
            std::path::Path::new("/opt/my app/app.jar")
        );
    }

    #[test]
    fn test_rejects_non_archive() {
        let err = ArchiveLocator::from_resource("file:/opt/classes/Main.class").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_missing_separator() {
        let err = ArchiveLocator::from_resource("jar:file:/opt/app.jar").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_remote_archive() {
        let err =
            ArchiveLocator::from_resource("jar:https://example.com/app.jar!/Main.class").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
