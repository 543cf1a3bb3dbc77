//! # Hanoiing Runtime
//!
//! Virtual machine for Hanoiing, a stack-and-register esoteric language
//! whose source text is the executable program. The machine owns one
//! arbitrary-precision signed register, three stacks whose elements strictly
//! decrease from top to bottom, and a program counter over code points.
//!
//! ## Key Features
//!
//! - **Fused decode and execute**: no parse phase; each step reads the code
//!   point under the program counter and runs it
//! - **Uniform branching**: successful pushes and pops, and the `z`/`n`/`p`
//!   conditionals, skip the following code point by advancing the counter
//!   one extra position
//! - **Unbounded integers**: register and stack elements are `BigInt`
//! - **Pluggable I/O**: the [`CodePointIo`] trait carries raw Unicode scalar
//!   values; [`StdIo`] speaks UTF-8 streams, [`TapeIo`] stays in memory
//!
//! ## Example
//!
//! ```rust
//! let outputs = hanoiing_runtime::run("=72o=105o", "").unwrap();
//! assert_eq!(outputs, vec![72, 105]); // "Hi"
//! ```

pub mod error;
pub mod exec;
pub mod io;
pub mod machine;
pub mod state;

pub use error::{Result, RuntimeError};
pub use io::{CodePointIo, StdIo, TapeIo};
pub use machine::{Machine, MachineConfig, StepTrace, TraceHook};
pub use state::MachineState;

use hanoiing_spec::Program;

/// Simple execution helper
///
/// Runs `source` against an in-memory tape seeded with the code points of
/// `input` and returns the code points written.
pub fn run(source: &str, input: &str) -> Result<Vec<u32>> {
    let mut machine = Machine::new(
        Program::new(source),
        TapeIo::from_text(input),
        MachineConfig::default(),
    );
    machine.run()?;
    Ok(machine.io_mut().take_outputs())
}
