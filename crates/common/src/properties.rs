//! Process configuration properties.
//!
//! A plain key/value table built once at startup and handed explicitly to
//! whatever needs it. Values are set on the command line Spring-style,
//! e.g. `--spring.profiles.active=prod`.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `--key=value` arguments. Anything else is skipped.
    ///
    /// Later occurrences of a key override earlier ones.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut props = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            match parse_arg(arg) {
                Some((key, value)) => {
                    props.set(key, value);
                }
                None => tracing::debug!(arg, "Ignoring non-property argument"),
            }
        }
        props
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the key was never set.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Set `key`, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }
}

fn parse_arg(arg: &str) -> Option<(&str, &str)> {
    let body = arg.strip_prefix("--")?;
    let (key, value) = body.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_collects_properties() {
        let props = Properties::from_args([
            "fleetinfo-api",
            "--spring.profiles.active=prod",
            "--server.port=8080",
        ]);
        let mut expected = Properties::new();
        expected.set("spring.profiles.active", "prod");
        expected.set("server.port", "8080");
        assert_eq!(props, expected);
    }

    #[test]
    fn test_from_args_skips_program_name() {
        let props = Properties::from_args(["fleetinfo-api", "--spring.profiles.active=test"]);
        assert_eq!(props.get("spring.profiles.active"), Some("test"));
        assert_eq!(props.get("fleetinfo-api"), None);
    }

    #[test]
    fn test_from_args_skips_malformed() {
        let props = Properties::from_args(["--verbose", "-x=1", "--=oops", "plain"]);
        assert_eq!(props, Properties::new());
    }

    #[test]
    fn test_empty_value_is_kept() {
        let props = Properties::from_args(["--spring.profiles.active="]);
        assert_eq!(props.get("spring.profiles.active"), Some(""));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let props = Properties::from_args(["--opts=a=b"]);
        assert_eq!(props.get("opts"), Some("a=b"));
    }

    #[test]
    fn test_later_argument_wins() {
        let props = Properties::from_args(["--fleet=dev", "--fleet=prod"]);
        assert_eq!(props.get("fleet"), Some("prod"));
    }

    #[test]
    fn test_set_and_get_or() {
        let mut props = Properties::new();
        assert_eq!(props.get_or("missing", "fallback"), "fallback");
        assert_eq!(props.set("k", "v1"), None);
        assert_eq!(props.set("k", "v2"), Some("v1".to_string()));
        assert_eq!(props.get_or("k", "fallback"), "v2");
    }
}
