//! # Decimal Literal Scanner
//!
//! Literal arguments are embedded directly in the instruction stream: `=`,
//! `j`, and `l` all read the run of ASCII digits that follows them. The
//! scanner matches the longest such run starting exactly at the program
//! counter, advances the counter past it, and returns its value. No digits
//! means value 0 with the counter untouched; the scanner has no error path.
//!
//! Values are arbitrary precision, so a literal wider than any machine word
//! still scans exactly.

use crate::program::Program;
use num_bigint::BigUint;
use num_traits::Zero;

/// Scan the maximal digit run at `*pc`, advancing `*pc` past it.
///
/// Only ASCII `0`-`9` participate; other digit-like code points are inert
/// data.
pub fn scan_decimal(program: &Program, pc: &mut usize) -> BigUint {
    let mut value = BigUint::zero();
    while let Some(digit) = program.get(*pc).filter(char::is_ascii_digit).and_then(|ch| ch.to_digit(10)) {
        value = value * 10u32 + digit;
        *pc += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str, mut pc: usize) -> (BigUint, usize) {
        let program = Program::new(source);
        let value = scan_decimal(&program, &mut pc);
        (value, pc)
    }

    #[test]
    fn test_single_digit() {
        let (value, pc) = scan("7", 0);
        assert_eq!(value, BigUint::from(7u32));
        assert_eq!(pc, 1);
    }

    #[test]
    fn test_maximal_munch() {
        let (value, pc) = scan("123abc", 0);
        assert_eq!(value, BigUint::from(123u32));
        assert_eq!(pc, 3);
    }

    #[test]
    fn test_no_digits_yields_zero_without_consuming() {
        let (value, pc) = scan("abc", 0);
        assert!(value.is_zero());
        assert_eq!(pc, 0);
    }

    #[test]
    fn test_scan_from_mid_program() {
        let (value, pc) = scan("=450x", 1);
        assert_eq!(value, BigUint::from(450u32));
        assert_eq!(pc, 4);
    }

    #[test]
    fn test_scan_at_end_of_program() {
        let (value, pc) = scan("=", 1);
        assert!(value.is_zero());
        assert_eq!(pc, 1);
    }

    #[test]
    fn test_leading_zeros() {
        let (value, pc) = scan("0042", 0);
        assert_eq!(value, BigUint::from(42u32));
        assert_eq!(pc, 4);
    }

    #[test]
    fn test_literal_beyond_u64() {
        let digits = "123456789012345678901234567890";
        let (value, pc) = scan(digits, 0);
        assert_eq!(value.to_string(), digits);
        assert_eq!(pc, digits.len());
    }

    #[test]
    fn test_non_ascii_digits_are_inert() {
        // Arabic-Indic three and superscript two are not literal digits
        let (value, pc) = scan("٣2", 0);
        assert!(value.is_zero());
        assert_eq!(pc, 0);

        let (value, pc) = scan("2²", 0);
        assert_eq!(value, BigUint::from(2u32));
        assert_eq!(pc, 1);
    }
}
