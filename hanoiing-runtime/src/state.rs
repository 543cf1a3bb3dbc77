//! Machine state: register, program counter, and the three stacks
//!
//! One `MachineState` exists per run. It is created at machine start and
//! mutated exclusively by the execution loop until the program counter runs
//! off the end of the text.
//!
//! Push and pop carry the language's uniform branching convention: on
//! success they advance the program counter one extra position, so the
//! following code point is skipped. On failure the counter is left alone and
//! the following code point executes normally.

use hanoiing_spec::{StackId, NUM_STACKS};
use num_bigint::BigInt;

/// The mutable heart of the machine.
///
/// Register and stack elements are arbitrary-precision signed integers;
/// neither magnitude nor stack depth has an upper bound.
#[derive(Debug, Clone)]
pub struct MachineState {
    /// The machine's only value
    pub register: BigInt,

    /// Program counter, in code points
    pub pc: usize,

    /// Stacks A, B, C. Invariant: strictly decreasing from top (last
    /// element) to bottom, enforced at push time only.
    stacks: [Vec<BigInt>; NUM_STACKS],
}

impl MachineState {
    /// Fresh state: register 0, PC 0, all stacks empty.
    pub fn new() -> Self {
        Self {
            register: BigInt::default(),
            pc: 0,
            stacks: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Read-only view of one stack, bottom first.
    pub fn stack(&self, id: StackId) -> &[BigInt] {
        &self.stacks[id.index()]
    }

    /// Pop the top of `id` into the register.
    ///
    /// Success skips the following code point. Popping an empty stack does
    /// nothing and does not skip.
    pub fn pop(&mut self, id: StackId) {
        if let Some(top) = self.stacks[id.index()].pop() {
            self.register = top;
            self.pc += 1; // success: skip the next code point
        }
    }

    /// Push a copy of the register onto `id`.
    ///
    /// Accepted only onto an empty stack or under a strictly larger top;
    /// success skips the following code point. A rejected push does nothing
    /// and does not skip. The register is unchanged either way.
    pub fn push(&mut self, id: StackId) {
        let stack = &mut self.stacks[id.index()];
        if stack.last().map_or(true, |top| self.register < *top) {
            stack.push(self.register.clone());
            self.pc += 1; // success: skip the next code point
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn strictly_decreasing_from_top(stack: &[BigInt]) -> bool {
        stack.windows(2).all(|pair| pair[1] < pair[0])
    }

    proptest! {
        #[test]
        fn test_invariant_holds_under_arbitrary_push_pop(
            ops in prop::collection::vec((any::<bool>(), -1_000i64..1_000), 0..64)
        ) {
            let mut state = MachineState::new();
            for (is_push, value) in ops {
                if is_push {
                    state.register = BigInt::from(value);
                    state.push(StackId::A);
                } else {
                    state.pop(StackId::A);
                }
                prop_assert!(strictly_decreasing_from_top(state.stack(StackId::A)));
            }
        }

        #[test]
        fn test_push_then_pop_round_trips(value in any::<i64>()) {
            let mut state = MachineState::new();
            state.register = BigInt::from(value);
            state.push(StackId::B);
            state.register = BigInt::from(0);
            state.pop(StackId::B);

            prop_assert_eq!(&state.register, &BigInt::from(value));
            prop_assert!(state.stack(StackId::B).is_empty());
        }
    }
}
