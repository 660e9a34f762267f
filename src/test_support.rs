//! Shared helpers for the module tests: a recording I2C bus and display
//! constructors.

use std::vec::Vec;

use embedded_hal::i2c::{ErrorType, I2c, Operation};

use crate::commands::DEFAULT_ADDRESS;
use crate::driver::Ssd1306;

/// In-memory I2C bus that records every write so tests can assert exact
/// wire bytes. Reads return zeroes.
#[derive(Default)]
pub struct RecordingBus {
    pub writes: Vec<Vec<u8>>,
}

impl ErrorType for RecordingBus {
    type Error = core::convert::Infallible;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.push(bytes.to_vec()),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}

/// Display over a recording bus with arbitrary geometry. The buffer must
/// be `buffer_len(width, height)` bytes.
pub fn display<'b>(buffer: &'b mut [u8], width: u16, height: u16) -> Ssd1306<'b, RecordingBus> {
    Ssd1306::new(
        RecordingBus::default(),
        DEFAULT_ADDRESS,
        width,
        height,
        false,
        buffer,
    )
    .unwrap()
}

/// The common 128x64 module.
pub fn display_128x64(buffer: &mut [u8]) -> Ssd1306<'_, RecordingBus> {
    display(buffer, 128, 64)
}

/// Collect the coordinates of every lit pixel.
pub fn set_pixels(
    display: &Ssd1306<'_, RecordingBus>,
    width: u16,
    height: u16,
) -> Vec<(u16, u16)> {
    let mut on = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if display.get_pixel(x, y) == Some(true) {
                on.push((x, y));
            }
        }
    }
    on
}

/// Whether `(x, y)` is in a [`set_pixels`] result.
pub fn pixel_set(pixels: &[(u16, u16)], x: u16, y: u16) -> bool {
    pixels.contains(&(x, y))
}
