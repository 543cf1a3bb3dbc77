//! Stack identifiers
//!
//! The machine owns exactly three stacks, named after the three pegs of the
//! Towers of Hanoi puzzle.

use std::fmt;

/// Number of stacks.
pub const NUM_STACKS: usize = 3;

/// One of the three machine stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StackId {
    A = 0,
    B = 1,
    C = 2,
}

impl StackId {
    /// All stacks, in order.
    pub const ALL: [StackId; NUM_STACKS] = [StackId::A, StackId::B, StackId::C];

    /// Index into a per-stack array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackId::A => write!(f, "A"),
            StackId::B => write!(f, "B"),
            StackId::C => write!(f, "C"),
        }
    }
}
