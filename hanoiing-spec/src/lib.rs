//! # Hanoiing Language Core
//!
//! Core types for Hanoiing, a stack-and-register esoteric language inspired
//! by the Towers of Hanoi puzzle. The source text is the executable program:
//! each Unicode code point is either an instruction or inert data, and
//! decoding is fused with execution at every program-counter position.
//!
//! ## Key Features
//!
//! - **Program text as code**: [`Program`] indexes the source by code point,
//!   not by byte
//! - **Closed opcode set**: [`Opcode::decode`] is a total static mapping;
//!   unbound code points are no-ops
//! - **Line-based jumps**: [`LineTable`] precomputes the offset of every
//!   line start, with the trailing sentinel entry the `l`/`L` instructions
//!   can reach
//! - **Embedded literals**: [`scan_decimal`] reads decimal arguments straight
//!   out of the instruction stream as arbitrary-precision integers
//!
//! ## Example
//!
//! ```rust
//! use hanoiing_spec::{Opcode, Program, scan_decimal};
//!
//! let program = Program::new("=72o");
//! assert_eq!(program.len(), 4);
//! assert_eq!(Opcode::decode('='), Opcode::SetLiteral);
//!
//! let mut pc = 1;
//! let literal = scan_decimal(&program, &mut pc);
//! assert_eq!(literal.to_string(), "72");
//! assert_eq!(pc, 3);
//! ```

pub mod lines;
pub mod opcode;
pub mod program;
pub mod scan;
pub mod stack;

pub use lines::LineTable;
pub use opcode::Opcode;
pub use program::Program;
pub use scan::scan_decimal;
pub use stack::{StackId, NUM_STACKS};

/// Size of the Unicode code space. Output values are reduced modulo this
/// constant, so every emitted code point lies in `[0, CODE_SPACE)`.
pub const CODE_SPACE: u32 = 0x11_0000;
