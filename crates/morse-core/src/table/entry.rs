use serde::Serialize;

/// One Morse symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub letter: char,
    pub code: String,
    pub weight: u32,
}

impl CodeEntry {
    /// Number of signals in the code. Codes are ASCII, so this is the byte length.
    pub(crate) fn len(&self) -> usize {
        self.code.len()
    }

    /// Signal at `pos`, or `None` when the code is shorter than `pos + 1`.
    pub fn signal_at(&self, pos: usize) -> Option<Signal> {
        self.code
            .as_bytes()
            .get(pos)
            .and_then(|&b| Signal::from_char(b as char))
    }
}
