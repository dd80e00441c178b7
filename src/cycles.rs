//! # Cycle-Penalty Calculator
//!
//! The opcode matrix stores base cycle costs; this module derives the final
//! cost of an already-decoded instruction once the execution loop knows
//! whether the effective address computation crossed a 256-byte page.

use crate::addressing::AddressingMode;
use crate::mnemonic::Mnemonic;
use crate::opcodes::Instruction;
use crate::Address;

/// Relation between the addresses before and after an effective-address
/// computation, with respect to 256-byte pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageBoundary {
    /// Both addresses fall in the same page.
    Same,
    /// The computation crossed into a different page.
    Crossed,
}

impl PageBoundary {
    /// Classify two addresses by their 256-byte page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core6502::{Address, PageBoundary};
    ///
    /// let base = Address::new(0x10FF);
    /// assert_eq!(PageBoundary::between(base, Address::new(0x10FE)), PageBoundary::Same);
    /// assert_eq!(PageBoundary::between(base, Address::new(0x1100)), PageBoundary::Crossed);
    /// ```
    pub const fn between(a: Address, b: Address) -> Self {
        if a.page() == b.page() {
            PageBoundary::Same
        } else {
            PageBoundary::Crossed
        }
    }
}

const fn is_branch(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::BCC
            | Mnemonic::BCS
            | Mnemonic::BEQ
            | Mnemonic::BMI
            | Mnemonic::BNE
            | Mnemonic::BPL
            | Mnemonic::BVC
            | Mnemonic::BVS
    )
}

// The read operations subject to the classic indexed page-crossing penalty.
// Stores (STA, SHA, ...) and read-modify-write operations always pay the
// worst case in their base cost and take no penalty here.
const fn is_penalized_read(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::ADC
            | Mnemonic::AND
            | Mnemonic::CMP
            | Mnemonic::EOR
            | Mnemonic::LAS
            | Mnemonic::LAX
            | Mnemonic::LDA
            | Mnemonic::LDX
            | Mnemonic::LDY
            | Mnemonic::ORA
            | Mnemonic::SBC
    )
}

const fn is_indexed_mode(mode: AddressingMode) -> bool {
    matches!(
        mode,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
    )
}

/// The final cycle cost of a decoded instruction given the page relation of
/// its effective-address computation.
///
/// - Taken branches cost one extra cycle, two when the target lands on a
///   different page. The base cost in the matrix is the not-taken baseline;
///   this function always models the taken case.
/// - Indexed reads (`AbsoluteX`, `AbsoluteY`, `IndirectY` modes of the read
///   operations) cost one extra cycle when the index crosses a page.
/// - Everything else returns the base cost unchanged.
///
/// Pure and total: any instruction and page relation yields a deterministic
/// count with no failure mode.
///
/// # Examples
///
/// ```rust
/// use core6502::{as_instruction, cycles_with_penalty, InstructionSet, PageBoundary};
///
/// // ADC $1234,X: 4 base cycles, +1 when indexing crosses a page.
/// let adc = as_instruction(0x7D, InstructionSet::Standard);
/// assert_eq!(cycles_with_penalty(adc, PageBoundary::Same), 4);
/// assert_eq!(cycles_with_penalty(adc, PageBoundary::Crossed), 5);
/// ```
pub fn cycles_with_penalty(instruction: Instruction, page_relation: PageBoundary) -> u64 {
    let crossed = matches!(page_relation, PageBoundary::Crossed);

    if is_branch(instruction.mnemonic) {
        return instruction.cycles + if crossed { 2 } else { 1 };
    }

    if crossed && is_penalized_read(instruction.mnemonic) && is_indexed_mode(instruction.mode) {
        return instruction.cycles + 1;
    }

    instruction.cycles
}
