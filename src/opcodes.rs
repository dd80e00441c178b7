//! # Opcode Matrix and Decoding
//!
//! This module contains the 256-entry opcode matrix that is the single source
//! of truth for instruction decoding, and [`as_instruction`], the decode
//! entry point used by the execution loop.
//!
//! The matrix covers the full 6502/NMOS opcode space: the 151 official
//! opcodes plus every undocumented opcode with consistent NMOS behavior.
//! Opcode bytes with no mapping at all lock up the processor and decode as
//! [`Mnemonic::JAM`] with 0 base cycles; modeling the actual halt is the
//! execution loop's job.
//!
//! The table is a `const` array built at compile time and never mutated, so
//! it is safe for unsynchronized concurrent reads.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::mnemonic::{InstructionSet, Mnemonic};

/// One row of the opcode matrix: what a single opcode byte stands for,
/// before instruction-set filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Operation identity.
    pub mnemonic: Mnemonic,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Cycle cost before any page-crossing penalty.
    pub base_cycles: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        mnemonic,
        mode,
        base_cycles,
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// The complete opcode matrix, indexed by opcode byte value.
///
/// Sourced from the published 6502/NMOS opcode matrix. Branch bases are the
/// branch-not-taken cost; indexed read bases exclude the page-crossing
/// penalty. Both are added by
/// [`cycles_with_penalty`](crate::cycles_with_penalty).
///
/// # Examples
///
/// ```rust
/// use core6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    // 0x00 - 0x0F
    op(BRK, Implied, 7),
    op(ORA, IndirectX, 6),
    op(JAM, Accumulator, 0),
    op(SLO, IndirectX, 8),
    op(NOP, ZeroPage, 3),
    op(ORA, ZeroPage, 3),
    op(ASL, ZeroPage, 5),
    op(SLO, ZeroPage, 5),
    op(PHP, Implied, 3),
    op(ORA, Immediate, 2),
    op(ASL, Accumulator, 2),
    op(ANC, Immediate, 2),
    op(NOP, Absolute, 4),
    op(ORA, Absolute, 4),
    op(ASL, Absolute, 6),
    op(SLO, Absolute, 6),
    // 0x10 - 0x1F
    op(BPL, Relative, 2),
    op(ORA, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(SLO, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(ORA, ZeroPageX, 4),
    op(ASL, ZeroPageX, 6),
    op(SLO, ZeroPageX, 6),
    op(CLC, Implied, 2),
    op(ORA, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(SLO, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(ORA, AbsoluteX, 4),
    op(ASL, AbsoluteX, 7),
    op(SLO, AbsoluteX, 7),
    // 0x20 - 0x2F
    op(JSR, Absolute, 6),
    op(AND, IndirectX, 6),
    op(JAM, Accumulator, 0),
    op(RLA, IndirectX, 8),
    op(BIT, ZeroPage, 3),
    op(AND, ZeroPage, 3),
    op(ROL, ZeroPage, 5),
    op(RLA, ZeroPage, 5),
    op(PLP, Implied, 4),
    op(AND, Immediate, 2),
    op(ROL, Accumulator, 2),
    op(ANC, Immediate, 2),
    op(BIT, Absolute, 4),
    op(AND, Absolute, 4),
    op(ROL, Absolute, 6),
    op(RLA, Absolute, 6),
    // 0x30 - 0x3F
    op(BMI, Relative, 2),
    op(AND, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(RLA, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(AND, ZeroPageX, 4),
    op(ROL, ZeroPageX, 6),
    op(RLA, ZeroPageX, 6),
    op(SEC, Implied, 2),
    op(AND, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(RLA, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(AND, AbsoluteX, 4),
    op(ROL, AbsoluteX, 7),
    op(RLA, AbsoluteX, 7),
    // 0x40 - 0x4F
    op(RTI, Implied, 6),
    op(EOR, IndirectX, 6),
    op(JAM, Accumulator, 0),
    op(SRE, IndirectX, 8),
    op(NOP, ZeroPage, 3),
    op(EOR, ZeroPage, 3),
    op(LSR, ZeroPage, 5),
    op(SRE, ZeroPage, 5),
    op(PHA, Implied, 3),
    op(EOR, Immediate, 2),
    op(LSR, Accumulator, 2),
    op(ALR, Immediate, 2),
    op(JMP, Absolute, 3),
    op(EOR, Absolute, 4),
    op(LSR, Absolute, 6),
    op(SRE, Absolute, 6),
    // 0x50 - 0x5F
    op(BVC, Relative, 2),
    op(EOR, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(SRE, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(EOR, ZeroPageX, 4),
    op(LSR, ZeroPageX, 6),
    op(SRE, ZeroPageX, 6),
    op(CLI, Implied, 2),
    op(EOR, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(SRE, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(EOR, AbsoluteX, 4),
    op(LSR, AbsoluteX, 7),
    op(SRE, AbsoluteX, 7),
    // 0x60 - 0x6F
    op(RTS, Implied, 6),
    op(ADC, IndirectX, 6),
    op(JAM, Accumulator, 0),
    op(RRA, IndirectX, 8),
    op(NOP, ZeroPage, 3),
    op(ADC, ZeroPage, 3),
    op(ROR, ZeroPage, 5),
    op(RRA, ZeroPage, 5),
    op(PLA, Implied, 4),
    op(ADC, Immediate, 2),
    op(ROR, Accumulator, 2),
    op(ARR, Immediate, 2),
    op(JMP, Indirect, 5),
    op(ADC, Absolute, 4),
    op(ROR, Absolute, 6),
    op(RRA, Absolute, 6),
    // 0x70 - 0x7F
    op(BVS, Relative, 2),
    op(ADC, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(RRA, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(ADC, ZeroPageX, 4),
    op(ROR, ZeroPageX, 6),
    op(RRA, ZeroPageX, 6),
    op(SEI, Implied, 2),
    op(ADC, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(RRA, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(ADC, AbsoluteX, 4),
    op(ROR, AbsoluteX, 7),
    op(RRA, AbsoluteX, 7),
    // 0x80 - 0x8F
    op(NOP, Immediate, 2),
    op(STA, IndirectX, 6),
    op(NOP, Immediate, 2),
    op(SAX, IndirectX, 6),
    op(STY, ZeroPage, 3),
    op(STA, ZeroPage, 3),
    op(STX, ZeroPage, 3),
    op(SAX, ZeroPage, 3),
    op(DEY, Implied, 2),
    op(NOP, Immediate, 2),
    op(TXA, Implied, 2),
    op(ANE, Immediate, 2),
    op(STY, Absolute, 4),
    op(STA, Absolute, 4),
    op(STX, Absolute, 4),
    op(SAX, Absolute, 4),
    // 0x90 - 0x9F
    op(BCC, Relative, 2),
    op(STA, IndirectY, 6),
    op(JAM, Accumulator, 0),
    op(SHA, IndirectY, 6),
    op(STY, ZeroPageX, 4),
    op(STA, ZeroPageX, 4),
    op(STX, ZeroPageY, 4),
    op(SAX, ZeroPageY, 4),
    op(TYA, Implied, 2),
    op(STA, AbsoluteY, 5),
    op(TXS, Implied, 2),
    op(TAS, AbsoluteY, 5),
    op(SHY, AbsoluteX, 5),
    op(STA, AbsoluteX, 5),
    op(SHX, AbsoluteY, 5),
    op(SHA, AbsoluteY, 5),
    // 0xA0 - 0xAF
    op(LDY, Immediate, 2),
    op(LDA, IndirectX, 6),
    op(LDX, Immediate, 2),
    op(LAX, IndirectX, 6),
    op(LDY, ZeroPage, 3),
    op(LDA, ZeroPage, 3),
    op(LDX, ZeroPage, 3),
    op(LAX, ZeroPage, 3),
    op(TAY, Implied, 2),
    op(LDA, Immediate, 2),
    op(TAX, Implied, 2),
    op(LXA, Immediate, 2),
    op(LDY, Absolute, 4),
    op(LDA, Absolute, 4),
    op(LDX, Absolute, 4),
    op(LAX, Absolute, 4),
    // 0xB0 - 0xBF
    op(BCS, Relative, 2),
    op(LDA, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(LAX, IndirectY, 5),
    op(LDY, ZeroPageX, 4),
    op(LDA, ZeroPageX, 4),
    op(LDX, ZeroPageY, 4),
    op(LAX, ZeroPageY, 4),
    op(CLV, Implied, 2),
    op(LDA, AbsoluteY, 4),
    op(TSX, Implied, 2),
    op(LAS, AbsoluteY, 4),
    op(LDY, AbsoluteX, 4),
    op(LDA, AbsoluteX, 4),
    op(LDX, AbsoluteY, 4),
    op(LAX, AbsoluteY, 4),
    // 0xC0 - 0xCF
    op(CPY, Immediate, 2),
    op(CMP, IndirectX, 6),
    op(NOP, Immediate, 2),
    op(DCP, IndirectX, 8),
    op(CPY, ZeroPage, 3),
    op(CMP, ZeroPage, 3),
    op(DEC, ZeroPage, 5),
    op(DCP, ZeroPage, 5),
    op(INY, Implied, 2),
    op(CMP, Immediate, 2),
    op(DEX, Implied, 2),
    op(SBX, Immediate, 2),
    op(CPY, Absolute, 4),
    op(CMP, Absolute, 4),
    op(DEC, Absolute, 6),
    op(DCP, Absolute, 6),
    // 0xD0 - 0xDF
    op(BNE, Relative, 2),
    op(CMP, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(DCP, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(CMP, ZeroPageX, 4),
    op(DEC, ZeroPageX, 6),
    op(DCP, ZeroPageX, 6),
    op(CLD, Implied, 2),
    op(CMP, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(DCP, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(CMP, AbsoluteX, 4),
    op(DEC, AbsoluteX, 7),
    op(DCP, AbsoluteX, 7),
    // 0xE0 - 0xEF
    op(CPX, Immediate, 2),
    op(SBC, IndirectX, 6),
    op(NOP, Immediate, 2),
    op(ISC, IndirectX, 8),
    op(CPX, ZeroPage, 3),
    op(SBC, ZeroPage, 3),
    op(INC, ZeroPage, 5),
    op(ISC, ZeroPage, 5),
    op(INX, Implied, 2),
    op(SBC, Immediate, 2),
    op(NOP, Implied, 2),
    op(SBC, Immediate, 2),
    op(CPX, Absolute, 4),
    op(SBC, Absolute, 4),
    op(INC, Absolute, 6),
    op(ISC, Absolute, 6),
    // 0xF0 - 0xFF
    op(BEQ, Relative, 2),
    op(SBC, IndirectY, 5),
    op(JAM, Accumulator, 0),
    op(ISC, IndirectY, 8),
    op(NOP, ZeroPageX, 4),
    op(SBC, ZeroPageX, 4),
    op(INC, ZeroPageX, 6),
    op(ISC, ZeroPageX, 6),
    op(SED, Implied, 2),
    op(SBC, AbsoluteY, 4),
    op(NOP, Implied, 2),
    op(ISC, AbsoluteY, 7),
    op(NOP, AbsoluteX, 4),
    op(SBC, AbsoluteX, 4),
    op(INC, AbsoluteX, 7),
    op(ISC, AbsoluteX, 7),
];

/// A fully decoded instruction.
///
/// Immutable value produced by [`as_instruction`]. `length` counts the
/// opcode byte plus operand bytes and is a pure function of the addressing
/// mode; `cycles` is the base cost before page-crossing penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The raw opcode byte.
    pub opcode: u8,
    /// Operation identity.
    pub mnemonic: Mnemonic,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Encoded instruction size in bytes (1-3), including the opcode byte.
    pub length: u8,
    /// Base cycle cost before any page-crossing penalty.
    pub cycles: u64,
    /// Which instruction set the operation belongs to.
    pub set: InstructionSet,
}

impl Default for Instruction {
    /// The sentinel instruction returned when an opcode is not decodable
    /// under the requested instruction set: the official NOP.
    fn default() -> Self {
        Self {
            opcode: 0xEA,
            mnemonic: Mnemonic::NOP,
            mode: AddressingMode::Implied,
            length: 1,
            cycles: 2,
            set: InstructionSet::Standard,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(opc=0x{:02X}, mode={}, len={}, cycles={}, set={})",
            self.mnemonic, self.opcode, self.mode, self.length, self.cycles, self.set
        )
    }
}

/// Decode an opcode byte under the requested instruction set.
///
/// Looks the byte up in [`OPCODE_TABLE`] and returns the full decode when
/// the operation belongs to `requested`. When it does not (for example a
/// standards-only core fetching an undocumented opcode), the sentinel
/// default instruction is returned instead; there is no failure mode.
///
/// A single table thereby serves both a strict standards-only core and an
/// NMOS-quirks-enabled core, with only the `requested` argument varying.
///
/// # Examples
///
/// ```rust
/// use core6502::{as_instruction, Instruction, InstructionSet, Mnemonic};
///
/// let lda = as_instruction(0xA9, InstructionSet::Standard);
/// assert_eq!(lda.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda.length, 2);
///
/// // 0xB3 is the undocumented LAX (d),Y: not decodable as Standard.
/// assert_eq!(as_instruction(0xB3, InstructionSet::Standard), Instruction::default());
/// assert_eq!(as_instruction(0xB3, InstructionSet::Nmos).mnemonic, Mnemonic::LAX);
/// ```
pub fn as_instruction(opcode: u8, requested: InstructionSet) -> Instruction {
    let entry = OPCODE_TABLE[opcode as usize];
    let set = entry.mnemonic.instruction_set();

    if set != requested {
        log::trace!(
            "opcode 0x{:02X} ({}) is {}, not decodable as {}",
            opcode,
            entry.mnemonic,
            set,
            requested
        );
        return Instruction::default();
    }

    Instruction {
        opcode,
        mnemonic: entry.mnemonic,
        mode: entry.mode,
        length: entry.mode.instruction_length(),
        cycles: entry.base_cycles as u64,
        set,
    }
}
