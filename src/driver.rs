//! Core device type: lifecycle, command protocol, and the bulk transfer.
//!
//! [`Ssd1306`] owns the I2C peripheral and a caller-supplied frame buffer.
//! Construction is traffic-free; [`Ssd1306::init()`] programs the
//! controller; drawing operations (see `raster`, `blit`, `scroll`) mutate
//! only the buffer; [`Ssd1306::show()`] pushes the whole buffer to the
//! panel in a single bulk write.

use embedded_hal::i2c::I2c;

use crate::commands::{
    CONTROL_CMD, CONTROL_DATA, SET_CHARGE_PUMP, SET_COL_ADDR, SET_COM_OUT_DIR, SET_COM_PIN_CFG,
    SET_CONTRAST, SET_DISP, SET_DISP_CLK_DIV, SET_DISP_OFFSET, SET_DISP_START_LINE, SET_ENTIRE_ON,
    SET_MEM_ADDR, SET_MUX_RATIO, SET_NORM_INV, SET_PAGE_ADDR, SET_PRECHARGE, SET_SEG_REMAP,
    SET_VCOM_DESEL,
};
use crate::error::Error;

/// Index of the first pixel byte in the frame buffer slice. Byte 0 is
/// reserved for the data control byte so [`Ssd1306::show()`] can transmit
/// marker and payload as one contiguous write.
pub(crate) const PAYLOAD_OFFSET: usize = 1;

/// Required frame buffer slice length for a `width` × `height` panel:
/// one page byte per column per 8 pixel rows, plus the reserved control
/// byte prefix.
pub const fn buffer_len(width: u16, height: u16) -> usize {
    width as usize * (height as usize / 8) + PAYLOAD_OFFSET
}

/// Blocking I2C driver for an SSD1306 monochrome OLED panel.
///
/// Maintains a 1-bit-per-pixel, page-organized frame buffer. All drawing
/// operations mutate only the buffer; the panel is updated exclusively by
/// [`show()`](Self::show).
///
/// # Lifecycle
///
/// 1. [`Ssd1306::new()`] — validates geometry and buffer, no I2C traffic.
/// 2. [`Ssd1306::init()`] — sends the power-on command sequence.
/// 3. Draw into the frame buffer, then [`show()`](Self::show) to transfer.
/// 4. [`release()`](Self::release) — hand the bus and buffer back.
///
/// # Example
///
/// ```no_run
/// use ssd1306_display_rs::{buffer_len, Ssd1306, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut buf = [0u8; buffer_len(128, 64)];
/// let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS, 128, 64, false, &mut buf).unwrap();
/// display.init().unwrap();
/// display.draw_line(0, 0, 127, 63);
/// display.show().unwrap();
/// # }
/// ```
pub struct Ssd1306<'buf, I2C> {
    i2c: I2C,
    address: u8,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) pages: u16,
    external_vcc: bool,
    pub(crate) buffer: &'buf mut [u8],
}

impl<'buf, I2C> Ssd1306<'buf, I2C>
where
    I2C: I2c,
{
    /// Construct a driver over a caller-owned frame buffer.
    ///
    /// No I2C traffic is generated; call [`init()`](Self::init) before any
    /// bus operation.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit device address, typically [`DEFAULT_ADDRESS`]
    ///   or [`ALT_ADDRESS`].
    /// * `width`, `height` — panel geometry in pixels; `height` must be a
    ///   positive multiple of 8.
    /// * `external_vcc` — `true` if the panel supply is external, `false`
    ///   to run the internal charge pump.
    /// * `buffer` — frame buffer slice of exactly
    ///   [`buffer_len(width, height)`](buffer_len) bytes.
    ///
    /// # Errors
    /// * [`Error::InvalidDimensions`] for zero or non-multiple-of-8 geometry.
    /// * [`Error::BufferSize`] if `buffer` has the wrong length.
    ///
    /// [`DEFAULT_ADDRESS`]: crate::DEFAULT_ADDRESS
    /// [`ALT_ADDRESS`]: crate::ALT_ADDRESS
    pub fn new(
        i2c: I2C,
        address: u8,
        width: u16,
        height: u16,
        external_vcc: bool,
        buffer: &'buf mut [u8],
    ) -> Result<Self, Error<I2C::Error>> {
        if width == 0 || height == 0 || height % 8 != 0 {
            return Err(Error::InvalidDimensions);
        }
        if buffer.len() != buffer_len(width, height) {
            return Err(Error::BufferSize);
        }

        Ok(Self {
            i2c,
            address,
            width,
            height,
            pages: height / 8,
            external_vcc,
            buffer,
        })
    }

    /// Program the controller and turn the panel on.
    ///
    /// Runs the full initialization sequence from the SSD1306 datasheet,
    /// then forces any leftover hardware scroll into the stopped state.
    /// The frame buffer is not transmitted; follow up with
    /// [`show()`](Self::show) once something has been drawn.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] on a bus-level failure.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        // Alternative COM pin configuration; wide short panels (more than
        // 2:1 aspect) additionally skip the left/right remap.
        let com_pin_cfg = if self.width as u32 > 2 * self.height as u32 {
            0x02
        } else {
            0x12
        };
        // The internal charge pump needs a longer precharge than an
        // external supply.
        let charge_pump = if self.external_vcc { 0x10 } else { 0x14 };
        let precharge = if self.external_vcc { 0x22 } else { 0xF1 };

        let init_commands = [
            // Display off
            SET_DISP,
            // Timing and driving scheme
            SET_MUX_RATIO,
            (self.height - 1) as u8,
            SET_DISP_OFFSET,
            0x00,
            SET_DISP_START_LINE,
            // Resolution and layout
            SET_SEG_REMAP | 0x01,
            SET_COM_OUT_DIR | 0x08,
            SET_COM_PIN_CFG,
            com_pin_cfg,
            // Display
            SET_CONTRAST,
            0xFF,
            SET_ENTIRE_ON,
            SET_NORM_INV,
            SET_DISP_CLK_DIV,
            0x80,
            // Charge pump
            SET_CHARGE_PUMP,
            charge_pump,
            SET_PRECHARGE,
            precharge,
            SET_VCOM_DESEL,
            0x30,
            // Address setting: horizontal mode
            SET_MEM_ADDR,
            0x00,
            // Display on
            SET_DISP | 0x01,
        ];

        for command in init_commands {
            self.write_command(command)?;
        }
        self.scroll_horiz_stop()
    }

    /// Enter low-power standby. The frame buffer is untouched.
    pub fn power_off(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(SET_DISP)
    }

    /// Exit standby and re-enable panel output.
    pub fn power_on(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(SET_DISP | 0x01)
    }

    /// Set the contrast (brightness) level, 0–255.
    pub fn set_contrast(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_command(SET_CONTRAST)?;
        self.write_command(value)
    }

    /// Invert every pixel on the panel (white-on-black becomes
    /// black-on-white). Affects the controller only, not the buffer.
    pub fn set_invert(&mut self, invert: bool) -> Result<(), Error<I2C::Error>> {
        self.write_command(SET_NORM_INV | invert as u8)
    }

    /// Transfer the frame buffer to the display.
    ///
    /// Programs the column and page address windows to cover the whole
    /// panel, then streams the buffer in a single bulk write. This is the
    /// only operation whose bus traffic scales with the buffer size.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] on a bus-level failure.
    pub fn show(&mut self) -> Result<(), Error<I2C::Error>> {
        let window = [
            SET_COL_ADDR,
            0x00,
            (self.width - 1) as u8,
            SET_PAGE_ADDR,
            0x00,
            (self.pages - 1) as u8,
        ];
        for command in window {
            self.write_command(command)?;
        }

        self.buffer[0] = CONTROL_DATA;
        self.i2c.write(self.address, self.buffer)?;
        Ok(())
    }

    /// Destroy the driver, returning the I2C peripheral and frame buffer.
    pub fn release(self) -> (I2C, &'buf mut [u8]) {
        (self.i2c, self.buffer)
    }

    /// Send a single command byte, framed with the command control byte.
    pub(crate) fn write_command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[CONTROL_CMD, command])?;
        Ok(())
    }
}

impl<I2C> Ssd1306<'_, I2C> {
    /// Panel width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Panel height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-pixel-tall pages in the frame buffer.
    #[inline]
    pub fn pages(&self) -> u16 {
        self.pages
    }

    /// The pixel region of the frame buffer (the reserved control-byte
    /// prefix is excluded). Byte `x + width * page` holds the 8 vertically
    /// stacked pixels of column `x` in `page`, bit 0 topmost.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[PAYLOAD_OFFSET..]
    }

    /// Zero the frame buffer. The panel keeps its current content until
    /// the next [`show()`](Self::show); no I2C traffic is generated.
    pub fn clear(&mut self) {
        self.buffer[PAYLOAD_OFFSET..].fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{DEFAULT_ADDRESS, SCROLL_DEACTIVATE};
    use crate::test_support::{display_128x64, RecordingBus};

    #[test]
    fn buffer_len_includes_control_prefix() {
        assert_eq!(buffer_len(128, 64), 128 * 8 + 1);
        assert_eq!(buffer_len(128, 32), 128 * 4 + 1);
        assert_eq!(buffer_len(8, 8), 9);
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        let mut buf = [0u8; 64];
        for (w, h) in [(0u16, 64u16), (128, 0), (128, 60)] {
            let bus = RecordingBus::default();
            match Ssd1306::new(bus, DEFAULT_ADDRESS, w, h, false, &mut buf) {
                Err(Error::InvalidDimensions) => {}
                _ => panic!("expected InvalidDimensions for {}x{}", w, h),
            }
        }
    }

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let mut buf = [0u8; 128 * 8]; // missing the control-byte prefix
        let bus = RecordingBus::default();
        match Ssd1306::new(bus, DEFAULT_ADDRESS, 128, 64, false, &mut buf) {
            Err(Error::BufferSize) => {}
            _ => panic!("expected BufferSize"),
        }
    }

    #[test]
    fn init_sends_datasheet_sequence_for_128x64() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let mut display = display_128x64(&mut buf);
        display.init().unwrap();

        let expected: &[u8] = &[
            0xAE, // display off
            0xA8, 0x3F, // mux ratio = height - 1
            0xD3, 0x00, // display offset
            0x40, // start line
            0xA1, // segment remap
            0xC8, // COM scan direction
            0xDA, 0x12, // COM pins: square-ish panel
            0x81, 0xFF, // contrast
            0xA4, // entire display on: follow RAM
            0xA6, // normal display
            0xD5, 0x80, // clock divide
            0x8D, 0x14, // charge pump: internal
            0xD9, 0xF1, // precharge: internal
            0xDB, 0x30, // VCOMH deselect
            0x20, 0x00, // horizontal addressing
            0xAF, // display on
            SCROLL_DEACTIVATE,
        ];

        let writes = display.release().0.writes;
        assert_eq!(writes.len(), expected.len());
        for (write, &byte) in writes.iter().zip(expected) {
            assert_eq!(write.as_slice(), &[CONTROL_CMD, byte]);
        }
    }

    #[test]
    fn init_uses_wide_panel_com_pin_config() {
        // 128x32 is wider than 2:1, selecting the no-remap COM layout.
        let mut buf = [0u8; buffer_len(128, 32)];
        let bus = RecordingBus::default();
        let mut display = Ssd1306::new(bus, DEFAULT_ADDRESS, 128, 32, false, &mut buf).unwrap();
        display.init().unwrap();

        let writes = display.release().0.writes;
        let com_pin = writes
            .iter()
            .position(|w| w[1] == SET_COM_PIN_CFG)
            .expect("COM pin command missing");
        assert_eq!(writes[com_pin + 1][1], 0x02);
        // Mux ratio follows the height.
        let mux = writes.iter().position(|w| w[1] == SET_MUX_RATIO).unwrap();
        assert_eq!(writes[mux + 1][1], 0x1F);
    }

    #[test]
    fn init_selects_external_vcc_constants() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let bus = RecordingBus::default();
        let mut display = Ssd1306::new(bus, DEFAULT_ADDRESS, 128, 64, true, &mut buf).unwrap();
        display.init().unwrap();

        let writes = display.release().0.writes;
        let pump = writes.iter().position(|w| w[1] == SET_CHARGE_PUMP).unwrap();
        assert_eq!(writes[pump + 1][1], 0x10);
        let pre = writes.iter().position(|w| w[1] == SET_PRECHARGE).unwrap();
        assert_eq!(writes[pre + 1][1], 0x22);
    }

    #[test]
    fn show_programs_window_then_streams_buffer() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let mut display = display_128x64(&mut buf);
        display.set_pixel(0, 0, true);
        display.show().unwrap();

        let writes = display.release().0.writes;
        assert_eq!(writes.len(), 7);
        let window: [u8; 6] = [SET_COL_ADDR, 0x00, 0x7F, SET_PAGE_ADDR, 0x00, 0x07];
        for (write, &byte) in writes[..6].iter().zip(&window) {
            assert_eq!(write.as_slice(), &[CONTROL_CMD, byte]);
        }

        let bulk = &writes[6];
        assert_eq!(bulk.len(), 128 * 8 + 1);
        assert_eq!(bulk[0], CONTROL_DATA);
        assert_eq!(bulk[1], 0x01); // pixel (0, 0)
    }

    #[test]
    fn power_and_invert_commands() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let mut display = display_128x64(&mut buf);
        display.power_off().unwrap();
        display.power_on().unwrap();
        display.set_invert(true).unwrap();
        display.set_invert(false).unwrap();

        let writes = display.release().0.writes;
        assert_eq!(writes[0][1], 0xAE);
        assert_eq!(writes[1][1], 0xAF);
        assert_eq!(writes[2][1], 0xA7);
        assert_eq!(writes[3][1], 0xA6);
    }

    #[test]
    fn set_contrast_sends_opcode_then_level() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let mut display = display_128x64(&mut buf);
        display.set_contrast(0x5A).unwrap();

        let writes = display.release().0.writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].as_slice(), &[CONTROL_CMD, SET_CONTRAST]);
        assert_eq!(writes[1].as_slice(), &[CONTROL_CMD, 0x5A]);
    }

    #[test]
    fn clear_zeroes_pixels_without_bus_traffic() {
        let mut buf = [0u8; buffer_len(128, 64)];
        let mut display = display_128x64(&mut buf);
        display.set_pixel(5, 5, true);
        display.set_pixel(127, 63, true);
        display.clear();

        assert!(display.buffer().iter().all(|&b| b == 0));
        assert!(display.release().0.writes.is_empty());
    }
}
