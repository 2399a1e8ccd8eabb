//! Driver crate for the TDA7419 audio processor
//!
//! The TDA7419 only has a *write-only* I²C interface, so the driver keeps a
//! mirror of all 17 registers in memory, remembers which of them changed
//! since they were last delivered and sends either the whole register file
//! or just the changed registers on request.
//!
//! The recommended way to use this driver is the [high-level interface]. If
//! you require a higher degree of flexibility, you can use the
//! [register-level interface] instead.
//!
//! This driver is built on top of [`embedded-hal`], which means it is portable
//! and can be used on any platform that implements the `embedded-hal` API.
//! With the `async` feature (enabled by default) the transmission methods are
//! `async` and use [`embedded-hal-async`] instead.
//!
//! [high-level interface]: hl/index.html
//! [register-level interface]: ll/index.html
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
//! [`embedded-hal-async`]: https://crates.io/crates/embedded-hal-async
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "async")]
use maybe_async::must_be_async as maybe_async_attr;
#[cfg(not(feature = "async"))]
use maybe_async::must_be_sync as maybe_async_attr;

#[cfg(not(feature = "async"))]
use embedded_hal as i2c_type;
#[cfg(feature = "async")]
use embedded_hal_async as i2c_type;

// Must come first, the logging macros are used by every other module.
#[macro_use]
mod fmt;

pub mod configs;
pub mod hl;
pub mod level;
pub mod ll;

#[cfg(test)]
mod mock;

pub use crate::{
    configs::Config,
    hl::{Error, TransferError, TDA7419},
};
