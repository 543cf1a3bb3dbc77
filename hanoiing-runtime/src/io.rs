//! Code-point I/O adapters
//!
//! The machine core reads and writes raw Unicode scalar values in
//! `[0, 0x110000)`, surrogates included; it never filters them. Everything
//! about stream encoding lives behind [`CodePointIo`].
//!
//! [`StdIo`] bridges to UTF-8 byte streams (stdin/stdout in practice).
//! [`TapeIo`] keeps code points in memory and is what tests and embedding
//! callers use.

use crate::error::{Result, RuntimeError};
use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// One-code-point-at-a-time stream boundary.
pub trait CodePointIo {
    /// Read the next code point. Blocking; end of stream is
    /// [`RuntimeError::InputExhausted`].
    fn read_one(&mut self) -> Result<u32>;

    /// Write one code point.
    fn write_one(&mut self, value: u32) -> Result<()>;
}

/// UTF-8 adapter over arbitrary byte streams.
///
/// Reads decode exactly one scalar per call. Writes encode one scalar and
/// flush, so interactive programs see output promptly. Surrogate values have
/// no UTF-8 encoding and surface as
/// [`RuntimeError::UnencodableCodePoint`].
#[derive(Debug)]
pub struct StdIo<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> StdIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Expected sequence length for a UTF-8 leading byte.
fn utf8_width(leading: u8) -> Option<usize> {
    match leading {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(bytes: &[u8]) -> RuntimeError {
    RuntimeError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 on input stream: {bytes:02x?}"),
    ))
}

impl<R: Read, W: Write> CodePointIo for StdIo<R, W> {
    fn read_one(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        if self.input.read(&mut buf[..1])? == 0 {
            return Err(RuntimeError::InputExhausted);
        }
        let width = utf8_width(buf[0]).ok_or_else(|| invalid_utf8(&buf[..1]))?;
        self.input.read_exact(&mut buf[1..width])?;

        let text = std::str::from_utf8(&buf[..width]).map_err(|_| invalid_utf8(&buf[..width]))?;
        match text.chars().next() {
            Some(ch) => Ok(ch as u32),
            None => Err(invalid_utf8(&buf[..width])),
        }
    }

    fn write_one(&mut self, value: u32) -> Result<()> {
        let ch = char::from_u32(value).ok_or(RuntimeError::UnencodableCodePoint { value })?;
        let mut buf = [0u8; 4];
        self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// In-memory input queue and output tape of raw code points.
///
/// Surrogate values pass through untouched, matching the unfiltered core.
#[derive(Debug, Clone, Default)]
pub struct TapeIo {
    inputs: VecDeque<u32>,
    outputs: Vec<u32>,
}

impl TapeIo {
    /// Tape with the given input code points queued.
    pub fn new(inputs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    /// Tape whose input queue is the code points of `input`.
    pub fn from_text(input: &str) -> Self {
        Self::new(input.chars().map(u32::from))
    }

    /// Everything written so far.
    pub fn outputs(&self) -> &[u32] {
        &self.outputs
    }

    /// Drain the output tape.
    pub fn take_outputs(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.outputs)
    }

    /// Remaining input code points.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl CodePointIo for TapeIo {
    fn read_one(&mut self) -> Result<u32> {
        self.inputs.pop_front().ok_or(RuntimeError::InputExhausted)
    }

    fn write_one(&mut self, value: u32) -> Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}
