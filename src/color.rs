//! RGB565 colors
//!
//! The ILI9341 is driven in 16 bits per pixel mode, where each pixel is a packed
//! integer of 5 red, 6 green and 5 blue bits:
//!
//! | Bits  | 15..11 | 10..5 | 4..0 |
//! |-------|--------|-------|------|
//! | Field | Red    | Green | Blue |
//!
//! [`Color::new`] scales 8-bit channels down to this depth and [`Color::rgb`]
//! scales them back up. Both round to nearest, so a round trip lands within 4 of
//! the input on the 5-bit channels and within 2 on the green channel.
//!
//! ## Example
//!
//! ```
//! use ili9341::{Color, color565, ByteOrder};
//!
//! let orange = color565(0xFF, 0xA5, 0x00);
//! assert_eq!(orange, Color::from_rgb888(0xFFA500));
//!
//! let (r, g, b) = orange.rgb();
//! assert_eq!((r, g, b), (0xFF, 0xA6, 0x00));
//!
//! // Panels expect the high byte first
//! assert_eq!(Color::RED.to_bytes(ByteOrder::BigEndian), [0xF8, 0x00]);
//! ```

use crate::config::ByteOrder;

/// A packed RGB565 color
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(pub u16);

const RED_MAX: u32 = 0x1F;
const GREEN_MAX: u32 = 0x3F;
const BLUE_MAX: u32 = 0x1F;

/// Scale an 8-bit channel to `max` levels, rounding to nearest
const fn quantize(value: u8, max: u32) -> u16 {
    ((value as u32 * max + 127) / 255) as u16
}

/// Scale a `max`-level channel back to 8 bits, rounding to nearest
const fn expand(value: u16, max: u32) -> u8 {
    ((value as u32 * 255 + max / 2) / max) as u8
}

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x0000);
    /// White
    pub const WHITE: Self = Self(0xFFFF);
    /// Red
    pub const RED: Self = Self(0xF800);
    /// Green
    pub const GREEN: Self = Self(0x07E0);
    /// Blue
    pub const BLUE: Self = Self(0x001F);
    /// Yellow
    pub const YELLOW: Self = Self(0xFFE0);
    /// Cyan
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta
    pub const MAGENTA: Self = Self(0xF81F);
    /// Orange
    pub const ORANGE: Self = Self(0xFD20);
    /// Navy
    pub const NAVY: Self = Self(0x000F);
    /// Dark green
    pub const DARKGREEN: Self = Self(0x03E0);
    /// Dark cyan
    pub const DARKCYAN: Self = Self(0x03EF);
    /// Maroon
    pub const MAROON: Self = Self(0x7800);
    /// Purple
    pub const PURPLE: Self = Self(0x780F);
    /// Olive
    pub const OLIVE: Self = Self(0x7BE0);
    /// Light grey
    pub const LIGHTGREY: Self = Self(0xC618);
    /// Dark grey
    pub const DARKGREY: Self = Self(0x7BEF);

    /// Pack 8-bit red, green and blue channels into RGB565
    ///
    /// Total over the whole `0..=255` range of every channel.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self((quantize(r, RED_MAX) << 11) | (quantize(g, GREEN_MAX) << 5) | quantize(b, BLUE_MAX))
    }

    /// Pack a `0xRRGGBB` value, ignoring any bits above the low 24
    pub const fn from_rgb888(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Unpack into 8-bit red, green and blue channels
    pub const fn rgb(self) -> (u8, u8, u8) {
        let r = (self.0 >> 11) & RED_MAX as u16;
        let g = (self.0 >> 5) & GREEN_MAX as u16;
        let b = self.0 & BLUE_MAX as u16;
        (expand(r, RED_MAX), expand(g, GREEN_MAX), expand(b, BLUE_MAX))
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Encode as the two bytes sent to the panel
    pub const fn to_bytes(self, order: ByteOrder) -> [u8; 2] {
        match order {
            ByteOrder::BigEndian => self.0.to_be_bytes(),
            ByteOrder::LittleEndian => self.0.to_le_bytes(),
        }
    }
}

/// Pack 8-bit channels into an RGB565 [`Color`]
///
/// Shorthand for [`Color::new`].
pub const fn color565(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}
