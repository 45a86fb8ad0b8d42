//! ILI9341 TFT Display Driver
//!
//! A driver for the ILI9341 TFT controller (240x320, RGB565) with built-in
//! drawing primitives and text, for use over an `embedded-hal` SPI bus.
//!
//! ## Features
//!
//! - `no_std` compatible, never allocates
//! - `embedded-hal` v1.0 support
//! - Software rotation through a single coordinate transform
//! - Lines, rectangles, rounded rectangles, triangles and circles, outline and filled
//! - Monospace text with wrapping, transparency and `core::fmt::Write`
//! - Every call validated before the first bus write
//! - `embedded-graphics` integration: `Display` is a `DrawTarget`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9341::{Builder, Color, Display, Interface, Rotation, color565};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new().rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//!
//! let _ = display.clear_screen();
//! let _ = display.fill_round_rect(10, 10, 120, 60, 8, Color::NAVY);
//! let _ = display.draw_circle(200, 120, 30, color565(255, 165, 0));
//! display.set_text_color(Color::WHITE, Some(Color::NAVY));
//! let _ = display.print("Hello", 20, 30);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ILI9341 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Shape rasterization
pub mod primitives;
/// Coordinate rotation utilities
pub mod rotation;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::{Color, color565};
pub use config::{
    Builder, ByteOrder, ColorOrder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation,
};
pub use display::{Display, DriverState};
pub use error::{BuilderError, Error, ErrorKind, InvalidRotation};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
