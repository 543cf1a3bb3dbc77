//! # Line-Index Table
//!
//! Precomputed code-point offsets of every line start in a program, used to
//! resolve the line-based jumps `l` and `L`. The table is built once from
//! the program text and never mutated afterward.
//!
//! The first entry is always 0 (start of program). Each subsequent entry is
//! the offset immediately following a `\n`. After the last separator a
//! sentinel entry 0 is appended, representing "one past the last line".
//! The sentinel is a reachable jump target: requesting the line number equal
//! to the table length jumps to program offset 0. The language definition
//! behaves this way, so the table reproduces it rather than trimming the
//! entry.

use crate::program::Program;

/// Code-point offsets of line starts, 1-indexed by line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTable {
    starts: Vec<usize>,
}

impl LineTable {
    /// Scan `program` once and record every line start plus the sentinel.
    pub fn build(program: &Program) -> Self {
        let mut starts = vec![0];
        for (offset, ch) in program.code_points().iter().enumerate() {
            if *ch == '\n' {
                starts.push(offset + 1);
            }
        }
        // One past the last line; reachable, and resolves to offset 0
        starts.push(0);
        Self { starts }
    }

    /// Number of entries, sentinel included. This is the largest valid line
    /// number.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always false: even the empty program has a first line and a sentinel.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Offset of the start of 1-based `line`, or `None` out of range.
    pub fn get(&self, line: usize) -> Option<usize> {
        if line >= 1 {
            self.starts.get(line - 1).copied()
        } else {
            None
        }
    }
}
