//! Runtime error types
//!
//! Almost nothing in Hanoiing is an error: out-of-range jumps, pops from an
//! empty stack, and rejected pushes are defined outcomes and stay inside the
//! machine. What remains fatal is listed here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// `i` executed with the input stream already at its end. There is no
    /// default value and no recovery; the run aborts.
    #[error("input exhausted: `i` read past the end of the input stream")]
    InputExhausted,

    /// The output adapter cannot encode this code point on its stream.
    /// Surrogate values reach the adapter unfiltered and UTF-8 cannot carry
    /// them.
    #[error("code point {value:#x} cannot be encoded on the output stream")]
    UnencodableCodePoint { value: u32 },

    /// The configured step limit was reached before the program halted.
    #[error("step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
