//! Open-bus device implementation.
//!
//! Stands in for unmapped address space.

use super::{BusDevice, WriteStatus};
use crate::Address;

/// Models unmapped address space on an NMOS bus.
///
/// Reads return the high byte of the absolute address, which is what the
/// data bus tends to hold when nothing drives it; writes are absorbed as
/// no-ops with [`WriteStatus::Ignored`]. A mapper can back holes in the
/// address space with this device instead of special-casing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenBus;

impl BusDevice for OpenBus {
    fn read(&self, absolute: Address, _relative: Address) -> u8 {
        absolute.page()
    }

    fn write(&mut self, _absolute: Address, _relative: Address, _value: u8) -> WriteStatus {
        WriteStatus::Ignored
    }
}
