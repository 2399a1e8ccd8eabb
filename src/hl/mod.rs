//! High-level interface to the TDA7419
//!
//! The entry point to this API is the [TDA7419] struct. Please refer to the
//! documentation there for more details.
//!
//! This module implements a high-level interface to the TDA7419. This is the
//! recommended way to access the TDA7419 using this crate, unless you need the
//! greater flexibility provided by the [register-level interface].
//!
//! The setters only change the in-memory register file. Nothing reaches the
//! device until [`TDA7419::send_changed_registers`] or
//! [`TDA7419::send_all_registers`] is called.
//!
//! [register-level interface]: ../ll/index.html

use core::fmt;

pub use error::*;

use crate::ll;

mod configure;
mod equalizer;
mod error;
mod input;
mod loudness;
mod mixing;
mod mute;
mod spectrum;
mod transmit;
mod volume;

/// Entry point to the TDA7419 driver API
///
/// Owns the register file. The I²C bus is only borrowed by the transmission
/// methods, so it can be shared with other devices between calls.
#[derive(Copy, Clone)]
pub struct TDA7419 {
    ll: ll::RegisterMap,
    topology_changed: bool,
    debug: bool,
}

// Printing the register dump is more useful than the derived output.
impl fmt::Debug for TDA7419 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "TDA7419 {{ topology_changed: {:?}, debug: {:?} }}",
            self.topology_changed, self.debug
        )?;
        fmt::Debug::fmt(&self.ll, f)
    }
}

impl Default for TDA7419 {
    fn default() -> Self {
        Self::new()
    }
}

impl TDA7419 {
    /// Create a new instance of `TDA7419`
    ///
    /// The register file holds the power-on defaults and nothing counts as
    /// changed. The input topology is considered changed until the first
    /// successful transmission, so that transmission runs an auto-zero cycle.
    pub const fn new() -> Self {
        TDA7419 {
            ll: ll::RegisterMap::new(),
            topology_changed: true,
            debug: false,
        }
    }

    /// Provides read access to the register-level mirror
    pub fn registers(&self) -> &ll::RegisterMap {
        &self.ll
    }

    /// Provides direct access to the register-level mirror
    ///
    /// Be aware that writes through the register level bypass clamping and
    /// don't mark input topology changes.
    pub fn ll(&mut self) -> &mut ll::RegisterMap {
        &mut self.ll
    }

    /// Enables or disables register dumps before every transmission
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Returns true if register dumps are enabled
    pub fn get_debug(&self) -> bool {
        self.debug
    }

    /// Returns true if an input selection changed since the last
    /// transmission that delivered it
    pub fn topology_changed(&self) -> bool {
        self.topology_changed
    }

    /// Returns true if any register has to be sent
    pub fn has_pending_changes(&self) -> bool {
        self.ll.is_changed()
    }

    /// Iterates over the indices of the registers that have to be sent
    pub fn changed_registers(&self) -> impl Iterator<Item = u8> + '_ {
        self.ll.changed()
    }
}

/// Clamps `value` into `min..=max`, logging a warning if it had to
fn clamp<T>(what: &str, value: T, min: T, max: T) -> T
where
    T: Ord + Copy + Into<i16>,
{
    let clamped = value.clamp(min, max);
    if clamped != value {
        let from: i16 = value.into();
        let to: i16 = clamped.into();
        warn!("{} clamped from {} to {}", what, from, to);
    }

    clamped
}

#[inline(always)]
fn bit(enabled: bool) -> u8 {
    enabled as u8
}
