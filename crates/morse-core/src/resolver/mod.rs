//! Resolution of partially-known Morse patterns into ranked letters.
//!
//! A query is planned into one of three lookups (exact code, length only,
//! known positions), matched against the code table, then ranked by
//! descending weight.

use std::cmp::Reverse;

use tracing::{debug, debug_span};

use crate::query::{Query, WILDCARD};
use crate::settings::{settings, ResolverSettings};
use crate::table::{CodeEntry, CodeTable};

mod plan;

pub use plan::{LengthPolicy, Lookup, OPEN_LENGTH};

/// Resolve `query` against the global table and settings.
///
/// Returns letters ordered from most to least likely. No match yields an
/// empty vector; no input is rejected.
pub fn resolve(query: &str) -> Vec<char> {
    Resolver::global().resolve(query)
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a CodeTable,
    policy: LengthPolicy,
    wildcard: char,
}

impl Resolver<'static> {
    /// Resolver over `CodeTable::global()` configured from `settings()`.
    pub fn global() -> Self {
        Resolver::with_settings(CodeTable::global(), &settings().resolver)
    }
}

impl<'a> Resolver<'a> {
    /// Resolver with the default length policy and `?` wildcard.
    pub fn new(table: &'a CodeTable) -> Self {
        Self {
            table,
            policy: LengthPolicy::default(),
            wildcard: WILDCARD,
        }
    }

    pub fn with_settings(table: &'a CodeTable, resolver: &ResolverSettings) -> Self {
        Self {
            table,
            policy: LengthPolicy {
                open_length: resolver.open_length,
            },
            wildcard: resolver.wildcard(),
        }
    }

    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn resolve(&self, query: &str) -> Vec<char> {
        self.resolve_entries(query)
            .into_iter()
            .map(|e| e.letter)
            .collect()
    }

    /// Same ranking as `resolve`, keeping code and weight.
    pub fn resolve_entries(&self, query: &str) -> Vec<&'a CodeEntry> {
        let _span = debug_span!("resolve", query).entered();
        let lookup = self.plan(query);
        let mut entries = self.collect(&lookup);
        entries.sort_by_key(|e| Reverse(e.weight));
        debug!(kind = lookup.kind(), candidate_count = entries.len());
        entries
    }

    /// Decide which lookup `query` takes.
    pub fn plan(&self, query: &str) -> Lookup<'a> {
        if let Some(entry) = self.table.get(query) {
            return Lookup::Exact(entry);
        }
        let parsed = Query::parse(query, self.wildcard);
        let known = parsed.known_positions();
        let len = parsed.len();
        if known.is_empty() {
            Lookup::LengthOnly { len }
        } else {
            Lookup::Positional { known, len }
        }
    }

    fn collect(&self, lookup: &Lookup<'a>) -> Vec<&'a CodeEntry> {
        match lookup {
            Lookup::Exact(entry) => vec![*entry],
            Lookup::LengthOnly { len } => self
                .table
                .entries()
                .filter(|e| e.len() == *len)
                .collect(),
            Lookup::Positional { known, len } => self
                .table
                .entries()
                .filter(|e| known.matches(e) && self.policy.accepts(*len, e.len()))
                .collect(),
        }
    }
}
