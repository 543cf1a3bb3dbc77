//! # Program Text
//!
//! A Hanoiing program is its own source text: an immutable ordered sequence
//! of Unicode scalar values, indexed by code-point position (not byte
//! offset). The program is constructed once and read-only thereafter.

use std::fmt;

/// An immutable Hanoiing program.
///
/// Indexing is by code point, so a program containing multi-byte characters
/// still has one position per character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    code: Vec<char>,
}

impl Program {
    /// Create a program from its source text.
    pub fn new(source: &str) -> Self {
        Self {
            code: source.chars().collect(),
        }
    }

    /// Number of code points in the program.
    ///
    /// The machine halts when the program counter reaches this value.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// True for the empty program, which halts without executing anything.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Code point at position `pc`, or `None` past the end.
    pub fn get(&self, pc: usize) -> Option<char> {
        self.code.get(pc).copied()
    }

    /// The full code-point sequence.
    pub fn code_points(&self) -> &[char] {
        &self.code
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.code {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
