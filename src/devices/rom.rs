//! ROM device implementation.
//!
//! Read-only storage; every write is rejected.

use super::{BusDevice, WriteStatus};
use crate::Address;

/// Read-only memory backing store.
///
/// Reads index by the relative address modulo the data length (mirroring,
/// same as [`RamDevice`](super::RamDevice)); writes are rejected with
/// [`WriteStatus::Failed`]. Whether a rejected write is fatal is the
/// execution loop's policy, not the device's.
///
/// # Examples
///
/// ```rust
/// use core6502::{Address, BusDevice, RomDevice, WriteStatus};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// let abs = Address::new(0xC000);
/// let rel = Address::new(0x0000);
/// assert_eq!(rom.read(abs, rel), 0xEA);
/// assert_eq!(rom.write(abs, rel, 0xFF), WriteStatus::Failed);
/// assert_eq!(rom.read(abs, rel), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Create a ROM device with the given contents, immutable from then on.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl BusDevice for RomDevice {
    fn read(&self, _absolute: Address, relative: Address) -> u8 {
        // A zero-sized device reads as zero rather than panicking.
        if self.data.is_empty() {
            return 0;
        }
        self.data[relative.raw() as usize % self.data.len()]
    }

    fn write(&mut self, absolute: Address, _relative: Address, _value: u8) -> WriteStatus {
        log::trace!("rejected write to ROM at {absolute}");
        WriteStatus::Failed
    }
}
