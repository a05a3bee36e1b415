//! Subcommand implementations for `morsetool`.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod resolve_ops;

use std::fs;
use std::io;
use std::path::Path;

use morse_core::settings::{parse_settings_toml, Settings, SettingsError};
use morse_core::table::{parse_codes_toml, CodeTable, TableError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Table(#[from] TableError),
    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Read and validate a code table file.
pub fn load_table_file(path: &Path) -> Result<(String, CodeTable), ConfigFileError> {
    let content = fs::read_to_string(path)?;
    let table = parse_codes_toml(&content)?;
    Ok((content, table))
}

/// Read and validate a settings file.
pub fn load_settings_file(path: &Path) -> Result<(String, Settings), ConfigFileError> {
    let content = fs::read_to_string(path)?;
    let settings = parse_settings_toml(&content)?;
    Ok((content, settings))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_default_table_file() {
        let file = write_temp(morse_core::table::default_toml());
        let (content, table) = load_table_file(file.path()).unwrap();
        assert_eq!(table.len(), 26);
        assert_eq!(content, morse_core::table::default_toml());
    }

    #[test]
    fn load_invalid_table_file() {
        let file = write_temp("[codes]\nE = { code = \"x\", weight = 1 }\n");
        let err = load_table_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::Table(TableError::InvalidCode { .. })
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Io(_)));
    }

    #[test]
    fn load_settings_file_roundtrip() {
        let file = write_temp(morse_core::settings::default_toml());
        let (_, settings) = load_settings_file(file.path()).unwrap();
        assert_eq!(settings.resolver.open_length, 3);
    }

    #[test]
    fn load_invalid_settings_file() {
        let file = write_temp("[resolver]\nopen_length = 0\nwildcard = \"?\"\n");
        let err = load_settings_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::Settings(SettingsError::InvalidValue { .. })
        ));
    }
}
