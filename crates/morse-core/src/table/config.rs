use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::entry::{CodeEntry, Signal};
use super::CodeTable;

#[derive(Deserialize)]
struct CodesConfig {
    codes: BTreeMap<String, RawCode>,
}

#[derive(Deserialize)]
struct RawCode {
    code: String,
    weight: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[codes] table is empty")]
    Empty,
    #[error("letter must be a single uppercase ASCII letter: {0:?}")]
    InvalidLetter(String),
    #[error("invalid code for {letter}: {code:?} (expected only '.' and '-')")]
    InvalidCode { letter: char, code: String },
    #[error("code {code:?} is used by both {first} and {second}")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
    #[error("weight {weight} is used by both {first} and {second}")]
    DuplicateWeight { weight: u32, first: char, second: char },
    #[error("code table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a `[codes]` TOML document into a `CodeTable`.
pub fn parse_codes_toml(toml_str: &str) -> Result<CodeTable, TableError> {
    let config: CodesConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.codes.is_empty() {
        return Err(TableError::Empty);
    }

    let mut codes: BTreeMap<String, CodeEntry> = BTreeMap::new();
    let mut weights: HashMap<u32, char> = HashMap::new();

    for (key, raw) in config.codes {
        let letter = parse_letter(&key)?;
        if raw.code.is_empty() || !raw.code.chars().all(|c| Signal::from_char(c).is_some()) {
            return Err(TableError::InvalidCode {
                letter,
                code: raw.code,
            });
        }
        if let Some(&first) = weights.get(&raw.weight) {
            return Err(TableError::DuplicateWeight {
                weight: raw.weight,
                first,
                second: letter,
            });
        }
        if let Some(existing) = codes.get(&raw.code) {
            return Err(TableError::DuplicateCode {
                code: raw.code,
                first: existing.letter,
                second: letter,
            });
        }
        weights.insert(raw.weight, letter);
        codes.insert(
            raw.code.clone(),
            CodeEntry {
                letter,
                code: raw.code,
                weight: raw.weight,
            },
        );
    }

    Ok(CodeTable { codes })
}

fn parse_letter(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Ok(c),
        _ => Err(TableError::InvalidLetter(key.to_string())),
    }
}
