//! I²C mock usable with either transport
//!
//! `embedded-hal-mock` only implements the blocking `I2c` trait for its I²C
//! mock. With the `async` feature the mock is wrapped so it also implements
//! `embedded_hal_async::i2c::I2c`, forwarding every call to the blocking one.
#![allow(dead_code)]

pub use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

#[cfg(not(feature = "async"))]
pub use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

#[cfg(feature = "async")]
pub use self::wrapper::I2cMock;

#[cfg(feature = "async")]
mod wrapper {
    use embedded_hal::i2c::{self, ErrorKind, ErrorType, Operation};
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    /// Blocking I²C mock behind the async trait
    pub struct I2cMock(Mock);

    impl I2cMock {
        pub fn new(expectations: &[Transaction]) -> Self {
            I2cMock(Mock::new(expectations))
        }

        pub fn done(&mut self) {
            self.0.done();
        }
    }

    impl ErrorType for I2cMock {
        type Error = ErrorKind;
    }

    impl embedded_hal_async::i2c::I2c for I2cMock {
        async fn read(&mut self, address: u8, read: &mut [u8]) -> Result<(), Self::Error> {
            i2c::I2c::read(&mut self.0, address, read)
        }

        async fn write(&mut self, address: u8, write: &[u8]) -> Result<(), Self::Error> {
            i2c::I2c::write(&mut self.0, address, write)
        }

        async fn write_read(
            &mut self,
            address: u8,
            write: &[u8],
            read: &mut [u8],
        ) -> Result<(), Self::Error> {
            i2c::I2c::write_read(&mut self.0, address, write, read)
        }

        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            i2c::I2c::transaction(&mut self.0, address, operations)
        }
    }
}
