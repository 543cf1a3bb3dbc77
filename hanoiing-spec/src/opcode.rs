//! # Opcode Definitions
//!
//! The Hanoiing opcode set is closed and fixed, so decoding is a static
//! match from code point to operation. Every unbound code point decodes to
//! [`Opcode::Nop`]; there is no such thing as an invalid instruction.
//!
//! ## Instruction Families
//!
//! - `a b c` / `A B C`: pop from / push onto stack A, B, or C
//! - `=` `+` `-` `~`: register arithmetic
//! - `j J l L`: jumps by offset literal, register offset, line literal,
//!   register line
//! - `z n p`: conditional skip of the following code point
//! - `i o`: one-code-point input and output

use crate::stack::StackId;

/// A decoded Hanoiing instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `a`/`b`/`c`: pop the top of the stack into the register, skipping the
    /// following code point on success
    Pop(StackId),
    /// `A`/`B`/`C`: push the register onto the stack, skipping the following
    /// code point on success
    Push(StackId),
    /// `=`: set the register to the following decimal literal (0 if absent)
    SetLiteral,
    /// `+`: increment the register
    Inc,
    /// `-`: decrement the register
    Dec,
    /// `~`: negate the register
    Neg,
    /// `j`: jump to the code-point offset given by the following literal
    Jump,
    /// `J`: jump to the code-point offset held in the register
    JumpRegister,
    /// `l`: jump to the start of the 1-based line given by the following
    /// literal
    JumpLine,
    /// `L`: jump to the start of the 1-based line held in the register
    JumpLineRegister,
    /// `z`: execute the following code point only if the register is zero
    IfZero,
    /// `n`: execute the following code point only if the register is
    /// negative
    IfNegative,
    /// `p`: execute the following code point only if the register is
    /// positive
    IfPositive,
    /// `i`: read one code point from the input stream into the register
    Read,
    /// `o`: write the register, reduced into the code space, to the output
    /// stream
    Write,
    /// Any other code point: inert data
    Nop,
}

impl Opcode {
    /// Decode one code point. Total: unbound code points yield [`Opcode::Nop`].
    pub fn decode(ch: char) -> Self {
        match ch {
            'a' => Opcode::Pop(StackId::A),
            'b' => Opcode::Pop(StackId::B),
            'c' => Opcode::Pop(StackId::C),
            'A' => Opcode::Push(StackId::A),
            'B' => Opcode::Push(StackId::B),
            'C' => Opcode::Push(StackId::C),
            '=' => Opcode::SetLiteral,
            '+' => Opcode::Inc,
            '-' => Opcode::Dec,
            '~' => Opcode::Neg,
            'j' => Opcode::Jump,
            'J' => Opcode::JumpRegister,
            'l' => Opcode::JumpLine,
            'L' => Opcode::JumpLineRegister,
            'z' => Opcode::IfZero,
            'n' => Opcode::IfNegative,
            'p' => Opcode::IfPositive,
            'i' => Opcode::Read,
            'o' => Opcode::Write,
            _ => Opcode::Nop,
        }
    }
}
