//! # Address Primitive
//!
//! This module provides the 16-bit address type used throughout the core and
//! the closed address interval used by bus/mapper layers to route reads and
//! writes to devices.
//!
//! Addresses carry a canonical big-endian byte encoding regardless of host
//! byte order, because they are compared against externally supplied byte
//! streams (ROM images, serialized test vectors). The byte encoding is a wire
//! format guarantee, not an internal representation detail.

use std::fmt;

use thiserror::Error;

/// Error returned when constructing an [`Address`] from a byte slice of the
/// wrong length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected 2 big-endian address bytes, got {0}")]
pub struct AddressBytesError(pub usize);

/// A 16-bit address in the CPU address space.
///
/// Two addresses compare by their raw value using a strict total order.
/// Construction from a raw integer and from a 2-byte big-endian buffer agree
/// bit-for-bit for the same logical value.
///
/// # Examples
///
/// ```rust
/// use core6502::Address;
///
/// let addr = Address::new(0xABCD);
/// assert_eq!(addr.raw(), 0xABCD);
/// assert_eq!(addr.bytes(), [0xAB, 0xCD]); // most significant byte first
/// assert_eq!(Address::from_bytes([0xAB, 0xCD]), addr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    raw: u16,
}

impl Address {
    /// Create an address from its raw 16-bit value.
    pub const fn new(raw: u16) -> Self {
        Self { raw }
    }

    /// Create an address from its 2-byte big-endian encoding.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            raw: u16::from_be_bytes(bytes),
        }
    }

    /// The raw 16-bit value.
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// The canonical big-endian byte encoding.
    pub const fn bytes(self) -> [u8; 2] {
        self.raw.to_be_bytes()
    }

    /// The 256-byte page this address falls in (the high byte).
    pub const fn page(self) -> u8 {
        (self.raw >> 8) as u8
    }
}

impl From<u16> for Address {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressBytesError;

    /// Parse an address from a byte stream. Exactly two big-endian bytes are
    /// expected.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [high, low] => Ok(Self::from_bytes([*high, *low])),
            _ => Err(AddressBytesError(bytes.len())),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADDR(0x{:04X})", self.raw)
    }
}

/// A closed interval `[from, till]` over addresses.
///
/// The endpoints are normalized at construction so that `from <= till` holds
/// regardless of argument order. An external bus/mapper uses
/// [`contains`](AddressRange::contains) and
/// [`overlaps`](AddressRange::overlaps) to decide which device answers a
/// given address; the routing algorithm itself lives outside this core.
///
/// # Examples
///
/// ```rust
/// use core6502::{Address, AddressRange};
///
/// let range = AddressRange::new(Address::new(0x2000), Address::new(0x0000));
/// assert_eq!(range.from(), Address::new(0x0000)); // endpoints normalized
/// assert_eq!(range.size(), 0x2001);
/// assert!(range.contains(Address::new(0x2000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    from: Address,
    till: Address,
}

impl AddressRange {
    /// Create a range spanning both endpoints, inclusive. The smaller
    /// endpoint becomes `from`.
    pub const fn new(a: Address, b: Address) -> Self {
        if a.raw <= b.raw {
            Self { from: a, till: b }
        } else {
            Self { from: b, till: a }
        }
    }

    /// The first address in the range.
    pub const fn from(self) -> Address {
        self.from
    }

    /// The last address in the range.
    pub const fn till(self) -> Address {
        self.till
    }

    /// Whether `addr` falls within the range, endpoints included.
    pub const fn contains(self, addr: Address) -> bool {
        self.from.raw <= addr.raw && addr.raw <= self.till.raw
    }

    /// Whether the two closed intervals intersect. Edge-touching ranges
    /// (`a.till == b.from`) count as overlapping.
    pub const fn overlaps(self, other: AddressRange) -> bool {
        self.from.raw <= other.till.raw && other.from.raw <= self.till.raw
    }

    /// The number of addresses in the range, always at least 1.
    pub const fn size(self) -> u64 {
        (self.till.raw as u64) - (self.from.raw as u64) + 1
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RANGE(0x{:04X}...0x{:04X})",
            self.from.raw, self.till.raw
        )
    }
}
