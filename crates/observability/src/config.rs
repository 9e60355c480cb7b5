//! Observability configuration, read from the environment.

use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string (e.g. "info,kontener_inventory=debug").
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that could not be parsed, if any.
    pub unknown_format: Option<String>,
    /// Raw filter directive that could not be parsed, if any. `filter` then
    /// holds the `info` fallback.
    pub invalid_filter: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            unknown_format: None,
            invalid_filter: None,
        }
    }
}

impl ObservabilityConfig {
    pub const FILTER_VAR: &'static str = "KONTENER_LOG";
    pub const FALLBACK_FILTER_VAR: &'static str = "RUST_LOG";
    pub const FORMAT_VAR: &'static str = "KONTENER_LOG_FORMAT";

    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the process environment, using `default_format` when
    /// `KONTENER_LOG_FORMAT` is unset.
    pub fn from_env_or(default_format: LogFormat) -> Self {
        Self::from_lookup_or(|key| std::env::var(key).ok(), default_format)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_or(lookup, LogFormat::default())
    }

    pub fn from_lookup_or<F>(lookup: F, default_format: LogFormat) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_filter = non_empty(Self::FILTER_VAR)
            .or_else(|| non_empty(Self::FALLBACK_FILTER_VAR))
            .unwrap_or_else(|| "info".to_string());
        let (filter, invalid_filter) = match EnvFilter::try_new(&raw_filter) {
            Ok(_) => (raw_filter, None),
            Err(_) => ("info".to_string(), Some(raw_filter)),
        };

        let (format, unknown_format) = match non_empty(Self::FORMAT_VAR) {
            None => (default_format, None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (default_format, Some(raw)),
            },
        };

        Self {
            filter,
            format,
            unknown_format,
            invalid_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn kontener_log_wins_over_rust_log() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("KONTENER_LOG", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.filter, "debug");

        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("KONTENER_LOG", "  "),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn parses_format_case_insensitively() {
        let config =
            ObservabilityConfig::from_lookup(lookup(&[("KONTENER_LOG_FORMAT", "Pretty")]));
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.unknown_format, None);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config =
            ObservabilityConfig::from_lookup(lookup(&[("KONTENER_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.unknown_format.as_deref(), Some("xml"));
    }

    #[test]
    fn malformed_filter_is_recorded_and_replaced_with_info() {
        let config =
            ObservabilityConfig::from_lookup(lookup(&[("KONTENER_LOG", "kontener=notalevel")]));
        assert_eq!(config.filter, "info");
        assert_eq!(config.invalid_filter.as_deref(), Some("kontener=notalevel"));

        let config = ObservabilityConfig::from_lookup(lookup(&[("KONTENER_LOG", "warn")]));
        assert_eq!(config.invalid_filter, None);
    }

    #[test]
    fn default_format_applies_only_when_unset() {
        let config = ObservabilityConfig::from_lookup_or(lookup(&[]), LogFormat::Compact);
        assert_eq!(config.format, LogFormat::Compact);

        let config = ObservabilityConfig::from_lookup_or(
            lookup(&[("KONTENER_LOG_FORMAT", "json")]),
            LogFormat::Compact,
        );
        assert_eq!(config.format, LogFormat::Json);

        let config = ObservabilityConfig::from_lookup_or(
            lookup(&[("KONTENER_LOG_FORMAT", "xml")]),
            LogFormat::Compact,
        );
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.unknown_format.as_deref(), Some("xml"));
    }
}
