//! Error types for the display driver.

use core::fmt;

/// Errors that can occur when configuring or communicating with the display.
#[derive(Debug)]
pub enum Error<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// Width or height of zero, or a height that is not a multiple of 8.
    InvalidDimensions,

    /// Supplied frame buffer slice does not match the required length
    /// ([`buffer_len`](crate::buffer_len) bytes).
    BufferSize,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidDimensions => {
                write!(f, "Invalid dimensions (height must be a positive multiple of 8)")
            }
            Error::BufferSize => write!(f, "Frame buffer slice has the wrong length"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::InvalidDimensions => defmt::write!(f, "Invalid dimensions"),
            Error::BufferSize => defmt::write!(f, "Wrong frame buffer length"),
        }
    }
}
