//! Blocking I2C driver for SSD1306 monochrome OLED displays.
//!
//! The driver keeps a 1-bit-per-pixel, page-organized frame buffer in a
//! caller-owned slice and splits work into two strictly separated halves:
//! drawing operations mutate only the buffer, and [`Ssd1306::show()`]
//! pushes the whole buffer to the panel in a single bulk write.
//!
//! # Architecture
//!
//! - **`driver`** — the [`Ssd1306`] device type: lifecycle, the command
//!   protocol, and the bulk transfer.
//! - **`raster`** — software rasterization (pixels, lines, rectangles,
//!   ellipses and circles, filled regions).
//! - **`blit`** — [`Font`] and [`Image`] descriptors and the text/image
//!   blit operations.
//! - **`scroll`** — the controller's hardware horizontal scroll and a
//!   software vertical scroll over the buffer.
//! - **`graphics`** — an `embedded-graphics` [`DrawTarget`] implementation
//!   so ecosystem tooling can render into the same buffer.
//! - **`commands`** (crate-private) — SSD1306 opcodes and control bytes.
//!
//! # Quick start
//!
//! ```no_run
//! use ssd1306_display_rs::{buffer_len, Ssd1306, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let mut buf = [0u8; buffer_len(128, 64)];
//! let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS, 128, 64, false, &mut buf).unwrap();
//! display.init().unwrap();
//!
//! display.draw_rect(0, 0, 128, 64);
//! display.draw_circle(63, 31, 20);
//! display.show().unwrap();
//! # }
//! ```
//!
//! # Crate features
//!
//! - **`defmt`** — `defmt::Format` implementations on public types for
//!   embedded logging.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![no_std]

#[cfg(test)]
extern crate std;

pub use blit::{Font, Image};
pub use commands::{ALT_ADDRESS, DEFAULT_ADDRESS};
pub use driver::{buffer_len, Ssd1306};
pub use error::Error;
pub use scroll::ScrollDirection;

mod blit;
mod commands;
mod driver;
mod error;
mod graphics;
mod raster;
mod scroll;

#[cfg(test)]
pub(crate) mod test_support;
