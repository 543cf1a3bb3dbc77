//! The Hanoiing virtual machine
//!
//! Drives the fused decode-and-execute loop: while the program counter is
//! inside the text, read the code point under it, take the unconditional
//! single step, and execute. The loop halts exactly when the counter leaves
//! the text; there is no halt instruction.

use crate::error::{Result, RuntimeError};
use crate::exec::execute;
use crate::io::CodePointIo;
use crate::state::MachineState;
use hanoiing_spec::{LineTable, Opcode, Program, StackId};
use num_bigint::BigInt;

/// Machine configuration
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    /// Emit a `tracing` event for every executed instruction
    pub trace: bool,

    /// Abort with [`RuntimeError::StepLimitExceeded`] after this many steps.
    /// `None` (the default) runs unbounded; the language itself has no
    /// cycle limit.
    pub max_steps: Option<u64>,
}

/// Everything an observer sees about one executed instruction.
///
/// Captured before the unconditional advance, so `pc` is the instruction's
/// own position.
#[derive(Debug)]
pub struct StepTrace<'a> {
    pub pc: usize,
    pub instruction: char,
    pub register: &'a BigInt,
    /// Stacks A, B, C, bottom first
    pub stacks: [&'a [BigInt]; 3],
}

/// Per-instruction observer. Purely observational: it receives shared
/// references and cannot affect machine semantics.
pub type TraceHook = Box<dyn FnMut(&StepTrace<'_>)>;

/// A Hanoiing machine bound to a program and an I/O adapter.
pub struct Machine<I> {
    program: Program,
    lines: LineTable,
    state: MachineState,
    io: I,
    config: MachineConfig,
    hook: Option<TraceHook>,
}

impl<I: CodePointIo> Machine<I> {
    /// Build a machine: the line-index table is computed here, once, and the
    /// mutable state starts fresh.
    pub fn new(program: Program, io: I, config: MachineConfig) -> Self {
        let lines = LineTable::build(&program);
        Self {
            program,
            lines,
            state: MachineState::new(),
            io,
            config,
            hook: None,
        }
    }

    /// Install an observer called once per executed instruction.
    pub fn set_trace_hook(&mut self, hook: TraceHook) {
        self.hook = Some(hook);
    }

    /// Current machine state (for inspection after or between runs).
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// The I/O adapter.
    pub fn io(&self) -> &I {
        &self.io
    }

    /// The I/O adapter, mutably (e.g. to drain an output tape).
    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    /// Give the adapter back, discarding the machine.
    pub fn into_io(self) -> I {
        self.io
    }

    /// Run until the program counter leaves the program text.
    ///
    /// Returns the number of instructions executed. The only failures are
    /// the fatal I/O conditions and, when configured, the step limit.
    pub fn run(&mut self) -> Result<u64> {
        let mut steps = 0u64;
        while let Some(ch) = self.program.get(self.state.pc) {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }

            self.observe(ch);

            // Baseline single step; the instruction may move the counter
            // further (skips and jumps)
            self.state.pc += 1;
            execute(
                Opcode::decode(ch),
                &mut self.state,
                &self.program,
                &self.lines,
                &mut self.io,
            )?;
            steps += 1;
        }
        Ok(steps)
    }

    fn observe(&mut self, ch: char) {
        if self.config.trace {
            tracing::trace!(
                pc = self.state.pc,
                instruction = %ch,
                register = %self.state.register,
                "step"
            );
        }
        if let Some(hook) = self.hook.as_mut() {
            hook(&StepTrace {
                pc: self.state.pc,
                instruction: ch,
                register: &self.state.register,
                stacks: [
                    self.state.stack(StackId::A),
                    self.state.stack(StackId::B),
                    self.state.stack(StackId::C),
                ],
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::TapeIo;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn machine(source: &str, input: &str) -> Machine<TapeIo> {
        Machine::new(
            Program::new(source),
            TapeIo::from_text(input),
            MachineConfig::default(),
        )
    }

    #[test]
    fn test_empty_program_halts_immediately() {
        let mut m = machine("", "");
        assert_eq!(m.run().unwrap(), 0);
        assert_eq!(m.state().pc, 0);
    }

    #[test]
    fn test_halt_condition_pc_at_or_past_end() {
        let mut m = machine("+++", "");
        let steps = m.run().unwrap();
        assert_eq!(steps, 3);
        assert!(m.state().pc >= 3);
        assert_eq!(m.state().register, BigInt::from(3));
    }

    #[test]
    fn test_skip_can_move_pc_one_past_end() {
        // The trailing push succeeds and skips a code point that does not
        // exist; the loop still halts
        let mut m = machine("=5A", "");
        m.run().unwrap();
        assert_eq!(m.state().pc, 4);
        assert_eq!(m.state().stack(StackId::A), &[BigInt::from(5)]);
    }

    #[test]
    fn test_step_limit_stops_bare_jump_loop() {
        // `j` with no digits scans 0, and 0 is in range: the program jumps
        // to its own start forever
        let mut m = Machine::new(
            Program::new("j"),
            TapeIo::default(),
            MachineConfig {
                max_steps: Some(100),
                ..MachineConfig::default()
            },
        );
        assert!(matches!(
            m.run(),
            Err(RuntimeError::StepLimitExceeded { limit: 100 })
        ));
    }

    #[test]
    fn test_trace_hook_sees_every_instruction() {
        let seen: Rc<RefCell<Vec<(usize, char)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut m = machine("+x-", "");
        m.set_trace_hook(Box::new(move |step| {
            sink.borrow_mut().push((step.pc, step.instruction));
        }));
        m.run().unwrap();

        assert_eq!(*seen.borrow(), vec![(0, '+'), (1, 'x'), (2, '-')]);
    }

    #[test]
    fn test_trace_hook_observes_pre_step_state() {
        let registers: Rc<RefCell<Vec<BigInt>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&registers);

        let mut m = machine("++", "");
        m.set_trace_hook(Box::new(move |step| {
            sink.borrow_mut().push(step.register.clone());
        }));
        m.run().unwrap();

        // Register value before each increment
        assert_eq!(
            *registers.borrow(),
            vec![BigInt::from(0), BigInt::from(1)]
        );
    }

    #[test]
    fn test_trace_hook_sees_skipped_instructions_never() {
        let seen: Rc<RefCell<Vec<char>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        // '+' after z is skipped because the register is nonzero
        let mut m = machine("=1z+-", "");
        m.set_trace_hook(Box::new(move |step| {
            sink.borrow_mut().push(step.instruction);
        }));
        m.run().unwrap();

        assert_eq!(*seen.borrow(), vec!['=', 'z', '-']);
        assert_eq!(m.state().register, BigInt::from(0));
    }

    #[test]
    fn test_into_io_returns_outputs() {
        let mut m = machine("=66o", "");
        m.run().unwrap();
        let mut tape = m.into_io();
        assert_eq!(tape.take_outputs(), vec![66]);
    }
}
