//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] directly, so any `embedded-graphics`
//! drawable can be rendered on the panel. There is no frame buffer: pixels go to
//! the controller as they are drawn, through the same rotation transform the
//! built-in primitives use.
//!
//! Pixels outside the logical frame are dropped, as `embedded-graphics` expects of
//! a draw target. Rectangles and solid fills become single address windows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ili9341::{Color, Config, Display, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let mut display = Display::new(interface, Config::default());
//!
//! let _ = display.clear(Color::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::RED, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, ILI9341!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    prelude::{Pixel, PointsIter},
    primitives::Rectangle,
};

use crate::color::Color;
use crate::config::Rotation;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Clip `area` to the logical frame, as `(x, y, w, h)`
fn clip(area: &Rectangle, frame: &Rectangle) -> Option<(u16, u16, u16, u16)> {
    let visible = area.intersection(frame);
    if visible.size.width == 0 || visible.size.height == 0 {
        return None;
    }
    Some((
        visible.top_left.x as u16,
        visible.top_left.y as u16,
        visible.size.width as u16,
        visible.size.height as u16,
    ))
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
                continue;
            }
            self.write_pixel(x as u16, y as u16, color)?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        // Window scan order only matches row-major input when unrotated
        let inside = clip(area, &self.bounding_box()) == Some(span_of(area));
        if self.rotation() != Rotation::Rotate0 || !inside {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }

        let (x, y, w, h) = span_of(area);
        let background = self.background();
        let mut colors = colors.into_iter();
        self.write_area(x, y, w, h, |_, _| colors.next().unwrap_or(background))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        match clip(area, &self.bounding_box()) {
            Some((x, y, w, h)) => self.fill_span(x, y, w, h, color),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color)
    }
}

/// `area` as `(x, y, w, h)`, truncated to u16
fn span_of(area: &Rectangle) -> (u16, u16, u16, u16) {
    (
        area.top_left.x as u16,
        area.top_left.y as u16,
        area.size.width as u16,
        area.size.height as u16,
    )
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let (width, height) = Display::size(self);
        Size::new(u32::from(width), u32::from(height))
    }
}
