//! Morse code table: letter, canonical code and ranking weight.
//!
//! The default table is embedded from `default_codes.toml` and built once
//! into a process-wide singleton. A custom table can be installed with
//! `CodeTable::init_custom` before the first `CodeTable::global()` call.

mod config;
mod entry;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_codes_toml, TableError};
pub use entry::{CodeEntry, Signal};

pub const DEFAULT_TOML: &str = include_str!("default_codes.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<CodeTable> = OnceLock::new();

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Code → entry mapping. Codes and weights are unique (checked on parse).
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: BTreeMap<String, CodeEntry>,
}

impl CodeTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_codes_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(TableError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static CodeTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_codes_toml(toml_str).expect("code table TOML must be valid")
        })
    }

    /// Exact lookup by canonical code.
    pub fn get(&self, code: &str) -> Option<&CodeEntry> {
        self.codes.get(code)
    }

    /// All entries in code order. Callers that need a ranking must sort by weight.
    pub fn entries(&self) -> impl Iterator<Item = &CodeEntry> {
        self.codes.values()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn global_has_all_letters() {
        let table = CodeTable::global();
        let letters: HashSet<char> = table.entries().map(|e| e.letter).collect();
        assert_eq!(letters.len(), 26);
        assert!(('A'..='Z').all(|c| letters.contains(&c)));
    }

    #[test]
    fn default_weights() {
        let table = CodeTable::global();
        assert_eq!(table.get(".").map(|e| (e.letter, e.weight)), Some(('E', 100)));
        assert_eq!(table.get("-").map(|e| (e.letter, e.weight)), Some(('T', 99)));
        assert_eq!(table.get("--.-").map(|e| (e.letter, e.weight)), Some(('Q', 75)));
        assert_eq!(table.get(".---").map(|e| (e.letter, e.weight)), Some(('J', 81)));
    }

    #[test]
    fn codes_are_at_most_four_signals() {
        let table = CodeTable::global();
        assert!(table.entries().all(|e| (1..=4).contains(&e.len())));
        assert_eq!(table.entries().filter(|e| e.len() == 4).count(), 12);
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        let err = CodeTable::init_custom("[codes]\n".to_string()).unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn init_custom_after_global_fails() {
        CodeTable::global();
        let err = CodeTable::init_custom(DEFAULT_TOML.to_string()).unwrap_err();
        assert!(matches!(err, TableError::AlreadyInitialized));
    }

    #[test]
    fn table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodeTable>();
    }
}
