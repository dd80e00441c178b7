//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 processor. The
//! addressing mode determines how many operand bytes follow an opcode and how
//! the CPU interprets them to form an effective address.

use strum_macros::{Display, EnumIter};

/// 6502 addressing mode enumeration.
///
/// # Encoded Sizes
///
/// The addressing mode fully determines the encoded instruction size,
/// including the opcode byte; see
/// [`instruction_length`](AddressingMode::instruction_length).
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Full 16-bit address. Example: `JMP $1234`.
    Absolute,

    /// 16-bit address indexed by X. Example: `LDA $1234,X`.
    /// Reads may incur a +1 cycle penalty when the index crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y. Example: `LDA $1234,Y`.
    /// Reads may incur a +1 cycle penalty when the index crosses a page.
    AbsoluteY,

    /// Operates directly on the accumulator register. Example: `LSR A`.
    Accumulator,

    /// 8-bit constant embedded in the instruction. Example: `LDA #$10`.
    Immediate,

    /// No operand, the operation is implied by the opcode. Example: `CLC`.
    Implied,

    /// Jump through a 16-bit pointer. Example: `JMP ($FFFC)`.
    Indirect,

    /// Indexed indirect: `(ZP + X)` then dereference. Example: `LDA ($40,X)`.
    IndirectX,

    /// Indirect indexed: ZP dereference then `+ Y`. Example: `LDA ($40),Y`.
    /// Reads may incur a +1 cycle penalty when adding Y crosses a page.
    IndirectY,

    /// Signed 8-bit branch offset relative to the program counter.
    /// Example: `BEQ label`.
    Relative,

    /// 8-bit address in the zero page. Example: `LDA $80`.
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    /// Example: `LDA $80,X`.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    /// Example: `LDX $80,Y`.
    ZeroPageY,
}

impl AddressingMode {
    /// The encoded instruction size in bytes, including the opcode byte.
    ///
    /// Total over all modes: 1 for Accumulator and Implied, 3 for the
    /// absolute and indirect modes, 2 for everything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implied.instruction_length(), 1);
    /// assert_eq!(AddressingMode::Immediate.instruction_length(), 2);
    /// assert_eq!(AddressingMode::Absolute.instruction_length(), 3);
    /// ```
    pub const fn instruction_length(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 1,
            AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}
