use core::fmt;
use core::fmt::{Display, Formatter};

use embedded_hal::i2c::{self, Error as _, ErrorKind, NoAcknowledgeSource};

#[cfg(feature = "defmt")]
use defmt::Format;

/// An error that can occur when sending registers
///
/// Nothing is retried internally. Which registers were delivered before the
/// error is visible through [`TDA7419::changed_registers`], so the caller can
/// simply repeat the call.
///
/// [`TDA7419::changed_registers`]: crate::TDA7419::changed_registers
pub enum Error<I2C>
where
    I2C: i2c::ErrorType,
{
    /// The full register file could not be written
    ///
    /// No register was committed.
    FullWrite(I2C::Error),

    /// Writing a single register failed
    ///
    /// Registers before it were committed, this one and all later ones are
    /// still pending.
    RegisterWrite {
        /// Index of the register that failed
        register: u8,
        /// The bus error
        error: I2C::Error,
    },
}

impl<I2C> Error<I2C>
where
    I2C: i2c::ErrorType,
{
    /// Classifies the underlying bus error
    pub fn kind(&self) -> TransferError {
        match self {
            Error::FullWrite(error) => error.kind().into(),
            Error::RegisterWrite { error, .. } => error.kind().into(),
        }
    }
}

impl<I2C> Display for Error<I2C>
where
    I2C: i2c::ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::FullWrite(_) => write!(f, "full write failed: {}", self.kind()),
            Error::RegisterWrite { register, .. } => {
                write!(f, "write of register {} failed: {}", register, self.kind())
            }
        }
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for Error<I2C> where I2C: i2c::ErrorType {}

// We can't derive this implementation, as the compiler would put the bound on
// `I2C` instead of on its error type.
impl<I2C> fmt::Debug for Error<I2C>
where
    I2C: i2c::ErrorType,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FullWrite(error) => write!(f, "FullWrite({:?})", error),
            Error::RegisterWrite { register, error } => write!(
                f,
                "RegisterWrite {{ register: {:?}, error: {:?} }}",
                register, error
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<I2C> Format for Error<I2C>
where
    I2C: i2c::ErrorType,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::FullWrite(_) => defmt::write!(f, "FullWrite({})", self.kind()),
            Error::RegisterWrite { register, .. } => defmt::write!(
                f,
                "RegisterWrite {{ register: {}, kind: {} }}",
                register,
                self.kind()
            ),
        }
    }
}

/// Bus transfer failure classes
///
/// The discriminants are the status codes two-wire bus libraries commonly
/// report for a finished transaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum TransferError {
    /// The payload did not fit into the transmit buffer
    PayloadTooLong = 1,
    /// The device did not acknowledge its address
    AddressNotAcknowledged = 2,
    /// The device did not acknowledge a data byte
    DataNotAcknowledged = 3,
    /// Any other bus error
    Other = 4,
    /// The transaction timed out
    Timeout = 5,
}

impl TransferError {
    /// Maps a transaction status code
    ///
    /// Returns `None` for `0`, which means success.
    pub fn from_status(status: u8) -> Option<Self> {
        match status {
            0 => None,
            1 => Some(TransferError::PayloadTooLong),
            2 => Some(TransferError::AddressNotAcknowledged),
            3 => Some(TransferError::DataNotAcknowledged),
            5 => Some(TransferError::Timeout),
            _ => Some(TransferError::Other),
        }
    }

    /// Returns the status code
    pub fn status(self) -> u8 {
        self as u8
    }
}

impl From<ErrorKind> for TransferError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => {
                TransferError::AddressNotAcknowledged
            }
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => {
                TransferError::DataNotAcknowledged
            }
            _ => TransferError::Other,
        }
    }
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            TransferError::PayloadTooLong => "payload too long",
            TransferError::AddressNotAcknowledged => "address not acknowledged",
            TransferError::DataNotAcknowledged => "data not acknowledged",
            TransferError::Other => "bus error",
            TransferError::Timeout => "timeout",
        };

        f.write_str(message)
    }
}
