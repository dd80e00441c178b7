//! Fuzz target for instruction decoding.
//!
//! Feeds arbitrary bytes through the decoder under both instruction sets and
//! through the penalty calculator to ensure no input can panic.

#![no_main]

use core6502::{as_instruction, cycles_with_penalty, InstructionSet, PageBoundary};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for &byte in data {
        for set in [InstructionSet::Standard, InstructionSet::Nmos] {
            let instruction = as_instruction(byte, set);

            for boundary in [PageBoundary::Same, PageBoundary::Crossed] {
                let total = cycles_with_penalty(instruction, boundary);
                assert!(total >= instruction.cycles);
            }
        }
    }
});
