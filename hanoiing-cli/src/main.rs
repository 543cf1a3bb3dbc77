//! Command-line runner for Hanoiing programs
//!
//! Loads a program file, wires the machine to stdin/stdout, and runs it to
//! completion. `--trace` dumps the machine state to stderr before every
//! instruction.

use std::fs;
use std::io::{stderr, stdin, stdout, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hanoiing_runtime::{Machine, MachineConfig, StdIo, StepTrace};
use hanoiing_spec::Program;

/// Run a Hanoiing program
#[derive(Debug, Parser)]
#[command(name = "hanoiing", version, about)]
struct Args {
    /// Path to the program file (UTF-8)
    program: PathBuf,

    /// Print every executed instruction and the machine state to stderr
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(stderr)
        .init();

    let args = Args::parse();
    let source = fs::read_to_string(&args.program)
        .with_context(|| format!("failed to read program {}", args.program.display()))?;

    let config = MachineConfig {
        trace: args.trace,
        ..MachineConfig::default()
    };
    let mut machine = Machine::new(
        Program::new(&source),
        StdIo::new(stdin().lock(), stdout().lock()),
        config,
    );

    if args.trace {
        machine.set_trace_hook(Box::new(dump_step));
    }

    machine.run()?;
    Ok(())
}

/// Stderr dump of one step, in the shape the interactive debugger shows:
/// position and instruction, then register, then the three stacks.
fn dump_step(step: &StepTrace<'_>) {
    let mut err = stderr().lock();
    let _ = writeln!(
        err,
        "\nPC: {} {:?}\nRegister: {}\nStacks:\n{:?}\n{:?}\n{:?}",
        step.pc, step.instruction, step.register, step.stacks[0], step.stacks[1], step.stacks[2]
    );
}
