//! # Memory-Mapped Device Support
//!
//! This module provides the device abstraction through which the CPU's bus
//! layer reaches backing stores: RAM, ROM, and memory-mapped peripherals.
//!
//! # Architecture
//!
//! - [`BusDevice`]: the capability trait a concrete backing store implements
//! - [`Device`]: a cheaply clonable, type-erased handle over any `BusDevice`,
//!   so heterogeneous devices can be stored uniformly by an external
//!   bus/mapper
//! - Device implementations: [`RamDevice`], [`RomDevice`], [`OpenBus`]
//!
//! Devices receive both the absolute address as seen by the whole address
//! space and the address relative to wherever the routing layer decided the
//! device begins. The device itself is agnostic to how that translation
//! happened.
//!
//! # Example
//!
//! ```rust
//! use core6502::{Address, Device, RamDevice, WriteStatus};
//!
//! let ram = Device::wrap(RamDevice::new(0x4000));
//!
//! let abs = Address::new(0x2042);
//! let rel = Address::new(0x0042);
//! assert_eq!(ram.write(abs, rel, 0xAA), WriteStatus::Written);
//!
//! // Clones share the underlying store.
//! let alias = ram.clone();
//! assert_eq!(alias.read(abs, rel), 0xAA);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use strum_macros::Display;

use crate::Address;

pub mod open_bus;
pub mod ram;
pub mod rom;

pub use open_bus::OpenBus;
pub use ram::RamDevice;
pub use rom::RomDevice;

/// Outcome of a device write, reported as data rather than control flow.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum WriteStatus {
    /// The value was accepted and stored.
    Written,
    /// The device rejected or could not perform the write, e.g. read-only
    /// memory.
    Failed,
    /// The write was absorbed as a no-op by design, e.g. the unmapped tail
    /// of a peripheral register bank.
    Ignored,
}

/// Capability trait for anything that can answer reads and writes at mapped
/// addresses.
///
/// `absolute` is the address as seen by the whole 16-bit address space;
/// `relative` is the same access translated to the device's own mapping by
/// the external routing layer.
///
/// Implementations must be total: neither operation may panic for any
/// address pair. Failure is expressed through [`WriteStatus`], never through
/// unwinding.
pub trait BusDevice {
    /// Read a byte.
    fn read(&self, absolute: Address, relative: Address) -> u8;

    /// Write a byte, reporting the outcome.
    fn write(&mut self, absolute: Address, relative: Address, value: u8) -> WriteStatus;
}

/// Type-erased, clonable handle to a [`BusDevice`] implementation.
///
/// Copies of a `Device` share the same underlying implementation: mutating
/// state through one handle is visible through all, and the implementation
/// is dropped with the last handle. Wrapping works for any implementation,
/// including ones that are not `Clone` themselves.
///
/// A single emulator core is expected to be driven by one execution thread;
/// the handle provides no internal locking.
#[derive(Clone)]
pub struct Device {
    inner: Rc<RefCell<dyn BusDevice>>,
}

impl Device {
    /// Wrap a concrete device implementation, erasing its type.
    pub fn wrap<T: BusDevice + 'static>(device: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(device)),
        }
    }

    /// Wrap an implementation that is already under shared ownership. The
    /// handle aliases the given `Rc` rather than copying the device.
    pub fn from_shared<T: BusDevice + 'static>(device: Rc<RefCell<T>>) -> Self {
        Self { inner: device }
    }

    /// Read a byte from the device.
    pub fn read(&self, absolute: Address, relative: Address) -> u8 {
        self.inner.borrow().read(absolute, relative)
    }

    /// Write a byte to the device, reporting the outcome.
    pub fn write(&self, absolute: Address, relative: Address, value: u8) -> WriteStatus {
        self.inner.borrow_mut().write(absolute, relative, value)
    }
}
