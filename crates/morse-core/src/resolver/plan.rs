use crate::query::KnownPositions;
use crate::table::CodeEntry;

/// Query length at which code length is no longer checked.
pub const OPEN_LENGTH: usize = 3;

/// Length rule for queries with at least one known position.
///
/// A query of exactly `open_length` symbols accepts a code of any length;
/// every other query length must equal the code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub open_length: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            open_length: OPEN_LENGTH,
        }
    }
}

impl LengthPolicy {
    pub fn accepts(&self, query_len: usize, code_len: usize) -> bool {
        query_len == self.open_length || code_len == query_len
    }
}

/// How a query is looked up. Exactly one branch applies to any query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The query is itself a code.
    Exact(&'a CodeEntry),
    /// Nothing is known; only the length constrains the match.
    LengthOnly { len: usize },
    /// Some positions are known; the length policy applies.
    Positional { known: KnownPositions, len: usize },
}

impl Lookup<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::LengthOnly { .. } => "length_only",
            Self::Positional { .. } => "positional",
        }
    }
}
