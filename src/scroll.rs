//! Scrolling: the controller's horizontal scroll feature and a software
//! vertical scroll over the frame buffer.
//!
//! Horizontal scroll runs inside the controller and keeps going without
//! further bus traffic until stopped. Vertical scroll is a buffer
//! transformation like any other drawing operation and needs a
//! [`show()`](crate::Ssd1306::show) to become visible.

use embedded_hal::i2c::I2c;

use crate::commands::{
    SCROLL_ACTIVATE, SCROLL_DEACTIVATE, SCROLL_HORIZ_LEFT, SCROLL_HORIZ_RIGHT,
};
use crate::driver::{Ssd1306, PAYLOAD_OFFSET};
use crate::error::Error;

/// Direction for the controller's continuous horizontal scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Right,
    Left,
}

impl<I2C> Ssd1306<'_, I2C>
where
    I2C: I2c,
{
    /// Start a continuous hardware scroll over the page range
    /// `start_page..=end_page` (each masked to 0–7).
    ///
    /// Any scroll already running is stopped first; the controller
    /// misbehaves if setup commands arrive while scrolling is active.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] on a bus-level failure.
    pub fn scroll_horiz(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        speed: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.scroll_horiz_stop()?;

        let setup = match direction {
            ScrollDirection::Right => SCROLL_HORIZ_RIGHT,
            ScrollDirection::Left => SCROLL_HORIZ_LEFT,
        };
        // TODO: map `speed` onto the datasheet's frame-interval encoding;
        // the interval byte is currently pinned to zero (five frames per
        // step) no matter what the caller asks for.
        let interval = speed & 0x00;

        let sequence = [
            setup,
            0x00,
            start_page & 0x07,
            interval,
            end_page & 0x07,
            0x00,
            0xFF,
            SCROLL_ACTIVATE,
        ];
        for command in sequence {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Stop any active hardware scroll. Safe to call at any time,
    /// scrolling or not.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] on a bus-level failure.
    pub fn scroll_horiz_stop(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(SCROLL_DEACTIVATE)
    }
}

impl<I2C> Ssd1306<'_, I2C> {
    /// Rotate the frame buffer vertically by one pixel row.
    ///
    /// Each column is treated as one `height`-bit string spanning all
    /// pages and circularly rotated: the row pushed off one edge reappears
    /// at the other. Applying this `height` times in one direction
    /// restores the buffer exactly.
    pub fn scroll_row_vert(&mut self, down: bool) {
        let width = self.width as usize;
        let pages = self.pages as usize;

        for col in 0..width {
            let mut carry = 0u8;

            if down {
                for page in 0..pages {
                    let index = PAYLOAD_OFFSET + page * width + col;
                    let byte = self.buffer[index];
                    // Bit leaving through the bottom of this page.
                    let next_carry = if byte & 0x80 != 0 { 0x01 } else { 0x00 };
                    self.buffer[index] = (byte << 1) | carry;
                    carry = next_carry;
                }
                // Wrap the bottom row into the top pixel.
                let top = PAYLOAD_OFFSET + col;
                self.buffer[top] = (self.buffer[top] & !0x01) | carry;
            } else {
                for page in (0..pages).rev() {
                    let index = PAYLOAD_OFFSET + page * width + col;
                    let byte = self.buffer[index];
                    // Bit leaving through the top of this page.
                    let next_carry = if byte & 0x01 != 0 { 0x80 } else { 0x00 };
                    self.buffer[index] = (byte >> 1) | carry;
                    carry = next_carry;
                }
                // Wrap the top row into the bottom pixel.
                let bottom = PAYLOAD_OFFSET + (pages - 1) * width + col;
                self.buffer[bottom] = (self.buffer[bottom] & !0x80) | carry;
            }
        }
    }
}
