//! Query patterns: signals and wildcards as typed by the caller.

use crate::table::{CodeEntry, Signal};

/// Default wildcard marker, meaning "unknown at this position".
pub const WILDCARD: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySymbol {
    Signal(Signal),
    Wildcard,
    /// Any other character. Kept as a known symbol that no code contains.
    Unrecognized(char),
}

impl QuerySymbol {
    /// Whether a code with `signal` at this position satisfies the symbol.
    fn accepts(self, signal: Option<Signal>) -> bool {
        match self {
            Self::Signal(s) => signal == Some(s),
            Self::Wildcard => true,
            Self::Unrecognized(_) => false,
        }
    }
}

/// A parsed query. Length is counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    symbols: Vec<QuerySymbol>,
}

impl Query {
    pub fn parse(text: &str, wildcard: char) -> Self {
        let symbols = text
            .chars()
            .map(|c| {
                if c == wildcard {
                    QuerySymbol::Wildcard
                } else if let Some(s) = Signal::from_char(c) {
                    QuerySymbol::Signal(s)
                } else {
                    QuerySymbol::Unrecognized(c)
                }
            })
            .collect();
        Self { symbols }
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }

    #[cfg(test)]
    fn symbols(&self) -> &[QuerySymbol] {
        &self.symbols
    }

    /// Positions holding anything other than a wildcard, left to right.
    pub fn known_positions(&self) -> KnownPositions {
        KnownPositions {
            known: self
                .symbols
                .iter()
                .enumerate()
                .filter(|(_, s)| **s != QuerySymbol::Wildcard)
                .map(|(pos, &s)| (pos, s))
                .collect(),
        }
    }
}

/// Zero-based position → known symbol, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPositions {
    known: Vec<(usize, QuerySymbol)>,
}

impl KnownPositions {
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = (usize, QuerySymbol)> + '_ {
        self.known.iter().copied()
    }

    /// True when every known position holds the same signal in `entry`'s code.
    /// A code shorter than a known position fails.
    pub fn matches(&self, entry: &CodeEntry) -> bool {
        self.known
            .iter()
            .all(|&(pos, symbol)| symbol.accepts(entry.signal_at(pos)))
    }
}
