//! Instruction execution
//!
//! [`execute`] runs one decoded instruction against the machine state. The
//! program counter has already taken its unconditional single step when an
//! instruction executes, so `state.pc` is the position of the following code
//! point; the conditional extra advance that `push`/`pop`/`z`/`n`/`p`
//! perform consumes exactly that position.

use crate::error::Result;
use crate::io::CodePointIo;
use crate::state::MachineState;
use hanoiing_spec::{scan_decimal, LineTable, Opcode, Program, CODE_SPACE};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Execute a single instruction.
///
/// Out-of-range jump targets, pops from empty stacks, and rejected pushes
/// are defined no-ops, not errors; only the I/O boundary can fail.
pub fn execute(
    op: Opcode,
    state: &mut MachineState,
    program: &Program,
    lines: &LineTable,
    io: &mut dyn CodePointIo,
) -> Result<()> {
    match op {
        Opcode::Pop(id) => state.pop(id),
        Opcode::Push(id) => state.push(id),

        Opcode::SetLiteral => {
            state.register = BigInt::from(scan_decimal(program, &mut state.pc));
        }
        Opcode::Inc => state.register += 1,
        Opcode::Dec => state.register -= 1,
        Opcode::Neg => state.register = -std::mem::take(&mut state.register),

        Opcode::Jump => {
            // Digits are consumed whether or not the target is valid
            let target = scan_decimal(program, &mut state.pc);
            if let Some(target) = target.to_usize() {
                if target < program.len() {
                    state.pc = target;
                }
            }
        }
        Opcode::JumpRegister => {
            if let Some(target) = state.register.to_usize() {
                if target < program.len() {
                    state.pc = target;
                }
            }
        }
        Opcode::JumpLine => {
            let line = scan_decimal(program, &mut state.pc);
            if let Some(start) = line.to_usize().and_then(|line| lines.get(line)) {
                state.pc = start;
            }
        }
        Opcode::JumpLineRegister => {
            if let Some(start) = state.register.to_usize().and_then(|line| lines.get(line)) {
                state.pc = start;
            }
        }

        // For the skip instructions the default is to execute the following
        // code point; the extra advance is the branch-not-taken path.
        Opcode::IfZero => {
            if !state.register.is_zero() {
                state.pc += 1;
            }
        }
        Opcode::IfNegative => {
            if state.register.sign() != Sign::Minus {
                state.pc += 1;
            }
        }
        Opcode::IfPositive => {
            if state.register.sign() != Sign::Plus {
                state.pc += 1;
            }
        }

        Opcode::Read => {
            state.register = BigInt::from(io.read_one()?);
        }
        Opcode::Write => {
            // Floored modulo keeps the result in [0, CODE_SPACE) for any
            // register sign and magnitude
            let code_point = state.register.mod_floor(&BigInt::from(CODE_SPACE));
            let code_point = code_point
                .to_u32()
                .expect("floored modulo stays within the code space");
            io.write_one(code_point)?;
        }

        Opcode::Nop => {}
    }
    Ok(())
}
