//! JAR manifest parser.
//!
//! A manifest is a main section of `Name: value` headers, optionally
//! followed by blank-line separated per-entry sections that each start with
//! a `Name` header. Values longer than a line continue on lines starting
//! with a single space.

use std::collections::BTreeMap;
use std::io::Read;

use fleetinfo_common::error::AppError;

/// Manifest attribute holding the application name.
pub const KEY_APP_NAME: &str = "Implementation-Title";

/// Manifest attribute holding the application version.
pub const KEY_APP_VERSION: &str = "Implementation-Version";

/// Manifest attribute holding the build date.
pub const KEY_BUILD_DATE: &str = "Build-Date";

/// Header naming the entry a per-entry section applies to.
const KEY_ENTRY_NAME: &str = "Name";

const MAX_HEADER_NAME_LEN: usize = 70;

/// A set of manifest headers with case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Keyed by lowercased name
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.values.insert(name.to_ascii_lowercase(), value);
    }
}

/// A parsed manifest.
///
/// Per-entry sections are checked for well-formedness but only the main
/// section is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: Attributes,
}

impl Manifest {
    /// Parse a manifest from raw bytes.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so one bad
    /// byte in a value does not hide the remaining headers.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        Self::parse_str(&String::from_utf8_lossy(bytes))
    }

    /// Read and parse a manifest from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, AppError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&bytes)
    }

    pub fn parse_str(text: &str) -> Result<Self, AppError> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut parser = SectionParser::default();
        let mut main = None;
        let mut line_no = 0;

        for line in normalized.split('\n') {
            line_no += 1;
            if line.is_empty() {
                let section = parser.finish();
                if main.is_none() {
                    main = Some(section.attributes);
                } else {
                    section.check_entry(line_no)?;
                }
                continue;
            }
            parser.feed(line, line_no)?;
        }

        let section = parser.finish();
        let main = match main {
            Some(main) => {
                section.check_entry(line_no)?;
                main
            }
            None => section.attributes,
        };

        Ok(Self { main })
    }

    /// Headers of the main section.
    pub fn main_attributes(&self) -> &Attributes {
        &self.main
    }
}

/// Headers of one section, plus the name of the first header seen.
struct Section {
    attributes: Attributes,
    first_header: Option<String>,
}

impl Section {
    /// A non-empty per-entry section must open with a `Name` header.
    fn check_entry(&self, line_no: usize) -> Result<(), AppError> {
        match self.first_header.as_deref() {
            None => Ok(()),
            Some(first) if first.eq_ignore_ascii_case(KEY_ENTRY_NAME) => Ok(()),
            Some(first) => Err(AppError::Manifest(format!(
                "Entry section ending at line {} starts with {:?} instead of Name",
                line_no, first
            ))),
        }
    }
}

/// Accumulates the headers of one section, joining continuation lines.
#[derive(Default)]
struct SectionParser {
    attributes: Attributes,
    first_header: Option<String>,
    current: Option<(String, String)>,
}

impl SectionParser {
    fn feed(&mut self, line: &str, line_no: usize) -> Result<(), AppError> {
        if let Some(rest) = line.strip_prefix(' ') {
            return match self.current.as_mut() {
                Some((_, value)) => {
                    value.push_str(rest);
                    Ok(())
                }
                None => Err(AppError::Manifest(format!(
                    "Continuation without a header at line {}",
                    line_no
                ))),
            };
        }

        self.flush();
        let (name, value) = line.split_once(": ").ok_or_else(|| {
            AppError::Manifest(format!("Invalid header field at line {}", line_no))
        })?;
        if !is_valid_header_name(name) {
            return Err(AppError::Manifest(format!(
                "Invalid header name {:?} at line {}",
                name, line_no
            )));
        }
        if self.first_header.is_none() {
            self.first_header = Some(name.to_string());
        }
        self.current = Some((name.to_string(), value.to_string()));
        Ok(())
    }

    fn flush(&mut self) {
        if let Some((name, value)) = self.current.take() {
            self.attributes.insert(&name, value);
        }
    }

    fn finish(&mut self) -> Section {
        self.flush();
        Section {
            attributes: std::mem::take(&mut self.attributes),
            first_header: self.first_header.take(),
        }
    }
}

fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_HEADER_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
