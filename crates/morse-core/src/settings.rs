//! Global settings loaded from TOML, following the same OnceLock pattern as the code table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::table::Signal;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub resolver: ResolverSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    pub open_length: usize,
    wildcard: String,
    #[serde(skip)]
    wildcard_parsed: char,
}

impl ResolverSettings {
    pub fn wildcard(&self) -> char {
        self.wildcard_parsed
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.resolver.wildcard_parsed = parse_wildcard(&s.resolver.wildcard)?;
    Ok(s)
}

fn parse_wildcard(raw: &str) -> Result<char, SettingsError> {
    let invalid = |reason: &str| SettingsError::InvalidValue {
        field: "resolver.wildcard".to_string(),
        reason: reason.to_string(),
    };
    let mut chars = raw.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid("must be a single character")),
    };
    if Signal::from_char(c).is_some() {
        return Err(invalid(&format!(
            "must not be a signal symbol ('{}' or '{}')",
            Signal::Dot.as_char(),
            Signal::Dash.as_char()
        )));
    }
    Ok(c)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.resolver.open_length == 0 {
        return Err(SettingsError::InvalidValue {
            field: "resolver.open_length".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.resolver.open_length, 3);
        assert_eq!(s.resolver.wildcard(), '?');
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[resolver]
open_length = 4
wildcard = "_"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.resolver.open_length, 4);
        assert_eq!(s.resolver.wildcard(), '_');
    }

    #[test]
    fn error_zero_open_length() {
        let toml = r#"
[resolver]
open_length = 0
wildcard = "?"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "resolver.open_length")
        );
    }

    #[test]
    fn error_multi_char_wildcard() {
        let toml = r#"
[resolver]
open_length = 3
wildcard = "??"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "resolver.wildcard")
        );
    }

    #[test]
    fn error_signal_wildcard() {
        let toml = r#"
[resolver]
open_length = 3
wildcard = "-"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref reason, .. } if reason.contains("('.' or '-')"))
        );
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_use_defaults() {
        assert_eq!(settings().resolver.open_length, 3);
        assert_eq!(settings().resolver.wildcard(), '?');
    }
}
