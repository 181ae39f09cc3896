//! Fleet resolution and packaged-artifact metadata extraction.

pub mod extractor;
pub mod fleet;
pub mod locator;
pub mod manifest;

pub use extractor::{CodeUnit, ManifestExtractor, extract_application_info};
pub use fleet::{resolve_fleet, resolve_fleet_with};
