//! RAM device implementation.
//!
//! Readable and writable storage addressed by the relative address.

use super::{BusDevice, WriteStatus};
use crate::Address;

/// Simple RAM backing store.
///
/// Reads and writes index by the relative address modulo the buffer length,
/// so a device mapped over a range larger than its storage mirrors its
/// contents, the way small RAM chips appear repeated on real buses. No
/// relative address can make an access panic.
///
/// # Examples
///
/// ```rust
/// use core6502::{Address, BusDevice, RamDevice, WriteStatus};
///
/// let mut ram = RamDevice::new(1024); // 1KB RAM
///
/// let abs = Address::new(0x8042);
/// let rel = Address::new(0x0042);
/// assert_eq!(ram.write(abs, rel, 0xAA), WriteStatus::Written);
/// assert_eq!(ram.read(abs, rel), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Create a RAM device of `size` bytes, all initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Load bytes into RAM starting at `offset`.
    ///
    /// Useful for seeding program data or test fixtures.
    ///
    /// # Panics
    ///
    /// Panics if `offset + bytes.len()` exceeds the device size.
    pub fn load_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
}

impl BusDevice for RamDevice {
    fn read(&self, _absolute: Address, relative: Address) -> u8 {
        // A zero-sized device reads as zero rather than panicking.
        if self.data.is_empty() {
            return 0;
        }
        self.data[relative.raw() as usize % self.data.len()]
    }

    fn write(&mut self, _absolute: Address, relative: Address, value: u8) -> WriteStatus {
        let len = self.data.len();
        if len == 0 {
            return WriteStatus::Ignored;
        }
        self.data[relative.raw() as usize % len] = value;
        WriteStatus::Written
    }
}
