//! Text rendering
//!
//! Glyphs come from an `embedded-graphics` [`MonoFont`], set through
//! [`Builder::font`](crate::Builder::font). Each character is rasterized into a
//! small bitmap and written as one window covering its cell, so opaque text costs
//! one address window per character.
//!
//! The cursor advances by the font's advance width. With wrapping on, a glyph that
//! would cross the right edge moves to the start of the next line, and a line that
//! would start below the frame moves back to the top. With wrapping off, glyphs are
//! clipped at the edges. `'\n'` starts a new line; any character outside printable
//! ASCII is drawn as a hollow box.
//!
//! ## Example
//!
//! ```
//! use core::fmt::Write;
//! use ili9341::{Color, Config, Display, DisplayInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # #[derive(Debug)]
//! # struct NullInterface;
//! # impl DisplayInterface for NullInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _: &mut D) {}
//! # }
//! let mut display = Display::new(NullInterface, Config::default());
//! display.set_text_color(Color::YELLOW, Some(Color::NAVY));
//! display.print("Hello", 10, 20).unwrap();
//! write!(display, " {}", 42).unwrap();
//! assert_eq!(display.cursor(), (10 + 8 * 6, 20));
//! ```

use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};

use crate::display::{Display, DisplayResult};
use crate::interface::DisplayInterface;

/// Largest glyph cell rendered, in pixels; bigger fonts are clipped
const MAX_CELL: u32 = 32;

/// One-bit bitmap of a single character cell
struct GlyphCanvas {
    rows: [u32; MAX_CELL as usize],
    size: Size,
}

impl GlyphCanvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            rows: [0; MAX_CELL as usize],
            size: Size::new(width.min(MAX_CELL), height.min(MAX_CELL)),
        }
    }

    fn set(&mut self, x: u32, y: u32) {
        if x < self.size.width && y < self.size.height {
            self.rows[y as usize] |= 1 << x;
        }
    }

    fn get(&self, x: u32, y: u32) -> bool {
        x < self.size.width && y < self.size.height && self.rows[y as usize] & (1 << x) != 0
    }

    /// Render `c` from `font` into the canvas
    fn glyph(font: &MonoFont<'_>, width: u32, height: u32, c: char) -> Self {
        let mut canvas = Self::new(width, height);
        if c == ' ' {
            return canvas;
        }
        if !is_printable(c) {
            canvas.placeholder(font.character_size.width, height);
            return canvas;
        }

        let mut utf8 = [0u8; 4];
        let style = MonoTextStyle::new(font, BinaryColor::On);
        let text =
            Text::with_baseline(c.encode_utf8(&mut utf8), Point::zero(), style, Baseline::Top);
        let Ok(_) = text.draw(&mut canvas);
        canvas
    }

    /// Hollow box inside a `width` x `height` cell, one pixel in from the right
    /// and from the top and bottom
    fn placeholder(&mut self, width: u32, height: u32) {
        if width < 3 || height < 4 {
            for y in 0..height {
                for x in 0..width {
                    self.set(x, y);
                }
            }
            return;
        }
        let (right, top, bottom) = (width - 2, 1, height - 2);
        for x in 0..=right {
            self.set(x, top);
            self.set(x, bottom);
        }
        for y in top..=bottom {
            self.set(0, y);
            self.set(right, y);
        }
    }
}

impl OriginDimensions for GlyphCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for GlyphCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() && point.x >= 0 && point.y >= 0 {
                self.set(point.x as u32, point.y as u32);
            }
        }
        Ok(())
    }
}

fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Print `text` starting at `(x, y)`
    ///
    /// Moves the cursor to `(x, y)` first, then behaves like [`Display::write_text`].
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `(x, y)` is outside the logical frame.
    pub fn print(&mut self, text: &str, x: i32, y: i32) -> DisplayResult<I> {
        self.set_cursor(x, y)?;
        self.write_text(text)
    }

    /// Print `text` at the current cursor using the current colors
    ///
    /// Only fails with `Error::Interface`.
    pub fn write_text(&mut self, text: &str) -> DisplayResult<I> {
        for c in text.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char) -> DisplayResult<I> {
        let font = self.config().font;
        let advance = (font.character_size.width + font.character_spacing) as i32;
        let line_height = font.character_size.height as i32;
        let (width, height) = self.size();
        let (width, height) = (i32::from(width), i32::from(height));
        let (mut x, mut y) = self.state.cursor;

        if c == '\n' {
            self.state.cursor = (0, y + line_height);
            return Ok(());
        }

        if self.state.text_wrap {
            if x > 0 && x + advance > width {
                x = 0;
                y += line_height;
            }
            if y >= height {
                y = 0;
            }
        }

        if x < width && y < height {
            let glyph = GlyphCanvas::glyph(font, advance as u32, line_height as u32, c);
            let visible_w = advance.min(width - x).min(MAX_CELL as i32);
            let visible_h = line_height.min(height - y).min(MAX_CELL as i32);
            self.draw_glyph(&glyph, x as u16, y as u16, visible_w as u16, visible_h as u16)?;
        }

        self.state.cursor = (x + advance, y);
        Ok(())
    }

    fn draw_glyph(
        &mut self,
        glyph: &GlyphCanvas,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> DisplayResult<I> {
        let foreground = self.state.foreground;
        if self.state.text_transparent {
            for dy in 0..h {
                for dx in 0..w {
                    if glyph.get(u32::from(dx), u32::from(dy)) {
                        self.write_pixel(x + dx, y + dy, foreground)?;
                    }
                }
            }
            return Ok(());
        }

        let background = self.state.background;
        self.write_area(x, y, w, h, |dx, dy| {
            if glyph.get(u32::from(dx), u32::from(dy)) {
                foreground
            } else {
                background
            }
        })
    }
}

impl<I> core::fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s).map_err(|_| core::fmt::Error)
    }
}
