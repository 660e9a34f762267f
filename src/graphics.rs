//! `embedded-graphics` integration.
//!
//! [`Ssd1306`] implements [`DrawTarget`] over [`BinaryColor`], so the
//! ecosystem's text, primitive, and image tooling can render into the
//! frame buffer alongside the driver's native operations. Drawing through
//! this interface touches only the buffer; call
//! [`show()`](crate::Ssd1306::show) to update the panel.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use crate::driver::Ssd1306;

impl<I2C> OriginDimensions for Ssd1306<'_, I2C> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<'_, I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Same clipping policy as the native rasterizer.
            self.set_pixel_signed(point.x, point.y, color == BinaryColor::On);
        }
        Ok(())
    }
}
