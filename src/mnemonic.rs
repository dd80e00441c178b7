//! # Mnemonic Taxonomy
//!
//! This module enumerates every operation in the 6502 opcode space: the 56
//! official operations plus the 20 undocumented ones that behave consistently
//! on NMOS silicon. [`Mnemonic::instruction_set`] classifies each operation
//! into the official or the NMOS instruction set.

use strum_macros::{Display, EnumIter};

/// Which instruction set an operation belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum InstructionSet {
    /// Official, documented 6502 instruction set.
    Standard,
    /// Undocumented opcodes with consistent behavior on NMOS 6502 silicon.
    Nmos,
}

/// Operation identity, independent of addressing mode.
///
/// Covers the official instruction set and the undocumented NMOS operations.
/// Note that the undocumented multi-byte NOPs and the 0xEB SBC alias reuse
/// the official `NOP`/`SBC` mnemonics, so they classify as
/// [`InstructionSet::Standard`].
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    ADC, // add with carry
    ALR, // and then logical shift right (undocumented)
    ANC, // and with carry-out of bit 7 (undocumented)
    AND, // bitwise and with accumulator
    ANE, // unstable and of A, X and operand (undocumented)
    ARR, // and then rotate right (undocumented)
    ASL, // arithmetic shift left
    BCC, // branch on carry clear
    BCS, // branch on carry set
    BEQ, // branch on equal
    BIT, // bit test
    BMI, // branch on minus
    BNE, // branch on not equal
    BPL, // branch on plus
    BRK, // force interrupt
    BVC, // branch on overflow clear
    BVS, // branch on overflow set
    CLC, // clear carry
    CLD, // clear decimal
    CLI, // clear interrupt disable
    CLV, // clear overflow
    CMP, // compare accumulator
    CPX, // compare X register
    CPY, // compare Y register
    DCP, // decrement then compare (undocumented)
    DEC, // decrement memory
    DEX, // decrement X register
    DEY, // decrement Y register
    EOR, // exclusive or with accumulator
    INC, // increment memory
    INX, // increment X register
    INY, // increment Y register
    ISC, // increment then subtract with carry (undocumented)
    JAM, // halt the processor (undocumented)
    JMP, // jump
    JSR, // jump to subroutine
    LAS, // and stack pointer, load A, X and SP (undocumented)
    LAX, // load accumulator and X (undocumented)
    LDA, // load accumulator
    LDX, // load X register
    LDY, // load Y register
    LSR, // logical shift right
    LXA, // unstable load A and X (undocumented)
    NOP, // no operation
    ORA, // bitwise or with accumulator
    PHA, // push accumulator
    PHP, // push processor status
    PLA, // pull accumulator
    PLP, // pull processor status
    RLA, // rotate left then and (undocumented)
    ROL, // rotate left
    ROR, // rotate right
    RRA, // rotate right then add with carry (undocumented)
    RTI, // return from interrupt
    RTS, // return from subroutine
    SAX, // store A and X (undocumented)
    SBC, // subtract with carry
    SBX, // and A with X then subtract (undocumented)
    SEC, // set carry
    SED, // set decimal
    SEI, // set interrupt disable
    SHA, // store A and X and high byte (undocumented)
    SHX, // store X and high byte (undocumented)
    SHY, // store Y and high byte (undocumented)
    SLO, // shift left then or (undocumented)
    SRE, // shift right then exclusive or (undocumented)
    STA, // store accumulator
    STX, // store X register
    STY, // store Y register
    TAS, // transfer A and X to stack pointer, store (undocumented)
    TAX, // transfer accumulator to X
    TAY, // transfer accumulator to Y
    TSX, // transfer stack pointer to X
    TXA, // transfer X to accumulator
    TXS, // transfer X to stack pointer
    TYA, // transfer Y to accumulator
}

impl Mnemonic {
    /// Classify the operation into the official or the NMOS instruction set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core6502::{InstructionSet, Mnemonic};
    ///
    /// assert_eq!(Mnemonic::LDA.instruction_set(), InstructionSet::Standard);
    /// assert_eq!(Mnemonic::LAX.instruction_set(), InstructionSet::Nmos);
    /// ```
    pub const fn instruction_set(self) -> InstructionSet {
        match self {
            Mnemonic::ALR
            | Mnemonic::ANC
            | Mnemonic::ANE
            | Mnemonic::ARR
            | Mnemonic::DCP
            | Mnemonic::ISC
            | Mnemonic::JAM
            | Mnemonic::LAS
            | Mnemonic::LAX
            | Mnemonic::LXA
            | Mnemonic::RLA
            | Mnemonic::RRA
            | Mnemonic::SAX
            | Mnemonic::SBX
            | Mnemonic::SHA
            | Mnemonic::SHX
            | Mnemonic::SHY
            | Mnemonic::SLO
            | Mnemonic::SRE
            | Mnemonic::TAS => InstructionSet::Nmos,
            _ => InstructionSet::Standard,
        }
    }
}
