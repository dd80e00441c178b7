//! # 6502 Decode and Memory-Access Core
//!
//! The decode and memory-access core of a cycle-accurate emulator for the
//! 6502-family instruction set, including the undocumented NMOS opcodes.
//!
//! For a host CPU-execution loop this crate answers two questions: given a
//! raw opcode byte and a requested legality mode, what instruction is it,
//! how many bytes does it occupy and how many cycles does it cost including
//! page-boundary penalties; and given a 16-bit address, how is a read or
//! write routed to a backing device.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{as_instruction, cycles_with_penalty, InstructionSet, Mnemonic, PageBoundary};
//!
//! // Decode LDA #$nn under the official instruction set.
//! let lda = as_instruction(0xA9, InstructionSet::Standard);
//! assert_eq!(lda.mnemonic, Mnemonic::LDA);
//! assert_eq!(lda.length, 2);
//! assert_eq!(lda.cycles, 2);
//!
//! // Charge the final cost once the page relation is known.
//! assert_eq!(cycles_with_penalty(lda, PageBoundary::Crossed), 2); // immediate: no penalty
//! ```
//!
//! ## Architecture
//!
//! - `address` - 16-bit [`Address`] primitive and closed [`AddressRange`]
//!   intervals for memory mapping
//! - `mnemonic` / `addressing` - the closed [`Mnemonic`] and
//!   [`AddressingMode`] taxonomy of the complete opcode space
//! - `opcodes` - the immutable 256-entry [`OPCODE_TABLE`] and the
//!   set-filtered decoder [`as_instruction`]
//! - `cycles` - the page-crossing penalty calculator
//!   [`cycles_with_penalty`]
//! - `devices` - the type-erased [`Device`] handle over the [`BusDevice`]
//!   capability, with RAM, ROM and open-bus implementations
//!
//! The register file, ALU, stack and interrupt handling, the
//! fetch-decode-execute loop, and the address-range-to-device routing table
//! are external consumers of this crate, not part of it.
//!
//! ## Error Handling
//!
//! Every operation is total over its documented input domain; failure is
//! represented as data, not control flow. An opcode outside the requested
//! instruction set decodes to the sentinel [`Instruction::default`], a
//! rejected write yields [`WriteStatus::Failed`], and out-of-order range
//! endpoints are normalized rather than rejected. The one exception is
//! parsing an address from a byte stream of the wrong length, which yields
//! [`AddressBytesError`].

pub mod address;
pub mod addressing;
pub mod cycles;
pub mod devices;
pub mod mnemonic;
pub mod opcodes;

pub use address::{Address, AddressBytesError, AddressRange};
pub use addressing::AddressingMode;
pub use cycles::{cycles_with_penalty, PageBoundary};
pub use devices::{BusDevice, Device, OpenBus, RamDevice, RomDevice, WriteStatus};
pub use mnemonic::{InstructionSet, Mnemonic};
pub use opcodes::{as_instruction, Instruction, OpcodeEntry, OPCODE_TABLE};
