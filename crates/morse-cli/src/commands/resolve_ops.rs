use std::path::Path;

use serde::Serialize;
use tracing::debug;

use morse_core::table::CodeTable;
use morse_core::{CodeEntry, Resolver};

use super::{load_settings_file, load_table_file};

/// Queries resolved by the `demo` subcommand.
pub const DEMO_QUERIES: [&str; 3] = [".?", "?.", "?"];

pub struct ResolveOptions<'a> {
    pub json: bool,
    pub weights: bool,
    pub table: Option<&'a str>,
    pub settings: Option<&'a str>,
}

/// One resolved pattern, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ResolveRecord<'a> {
    pub pattern: &'a str,
    pub letters: Vec<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<&'a CodeEntry>>,
}

/// Install custom table and settings files before the globals are first used.
/// Exits the process on an unreadable or invalid file.
pub fn install_custom(table: Option<&str>, settings: Option<&str>) {
    if let Some(path) = table {
        let (content, parsed) = die!(load_table_file(Path::new(path)), "Error in {path}: {}");
        die!(CodeTable::init_custom(content), "Error installing table: {}");
        debug!(path, code_count = parsed.len(), "custom table installed");
    }
    if let Some(path) = settings {
        let (content, _) = die!(
            load_settings_file(Path::new(path)),
            "Error in {path}: {}"
        );
        die!(
            morse_core::settings::init_custom(content),
            "Error installing settings: {}"
        );
        debug!(path, "custom settings installed");
    }
}

/// `letter(code,weight)` per candidate, space separated.
pub fn format_weighted(entries: &[&CodeEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}({},{})", e.letter, e.code, e.weight))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters in a bracketed list: `[I A]`.
pub fn format_bracketed(letters: &[char]) -> String {
    let inner: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(" "))
}

pub fn resolve_records<'a>(
    resolver: &Resolver<'a>,
    patterns: &'a [String],
    weights: bool,
) -> Vec<ResolveRecord<'a>> {
    patterns
        .iter()
        .map(|pattern| {
            let entries = resolver.resolve_entries(pattern);
            ResolveRecord {
                pattern,
                letters: entries.iter().map(|e| e.letter).collect(),
                candidates: weights.then_some(entries),
            }
        })
        .collect()
}

pub fn resolve_cmd(patterns: &[String], opts: &ResolveOptions) {
    install_custom(opts.table, opts.settings);
    let resolver = Resolver::global();
    let records = resolve_records(&resolver, patterns, opts.weights);

    if opts.json {
        let json = die!(
            serde_json::to_string_pretty(&records),
            "Error serializing results: {}"
        );
        println!("{json}");
        return;
    }

    for record in &records {
        let line = match &record.candidates {
            Some(entries) => format_weighted(entries),
            None => {
                let letters: Vec<String> = record.letters.iter().map(|c| c.to_string()).collect();
                letters.join(" ")
            }
        };
        println!("{}: {}", record.pattern, line);
    }
}

pub fn demo_cmd() {
    for query in DEMO_QUERIES {
        println!("{}", format_bracketed(&morse_core::resolve(query)));
    }
}
