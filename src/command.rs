//! ILI9341 command definitions
//!
//! This module defines the command bytes used to control the ILI9341
//! TFT controller. Commands are sent with the DC line low; their parameters
//! and pixel data follow with DC high.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter or pixel bytes (if any)
//!
//! Pixels are written by opening a window with [`COLUMN_ADDRESS_SET`] and
//! [`PAGE_ADDRESS_SET`], then streaming RGB565 values after [`MEMORY_WRITE`].
//! The controller fills the window row by row.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9341::{command, DisplayInterface, Interface};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Single red pixel at (10, 20)
//! let _ = interface.send_command(command::COLUMN_ADDRESS_SET);
//! let _ = interface.send_data(&[0x00, 10, 0x00, 10]);
//! let _ = interface.send_command(command::PAGE_ADDRESS_SET);
//! let _ = interface.send_data(&[0x00, 20, 0x00, 20]);
//! let _ = interface.send_command(command::MEMORY_WRITE);
//! let _ = interface.send_data(&[0xF8, 0x00]);
//! ```

// System control commands

/// Software reset (0x01)
///
/// Wait 5ms before the next command, 120ms before sleep out.
pub const SOFT_RESET: u8 = 0x01;

/// Sleep in (0x10)
///
/// Enters minimum power mode. Wait 5ms before the next command.
pub const SLEEP_IN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Wait 120ms before sending further commands.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORMAL_MODE_ON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVERSION_OFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVERSION_ON: u8 = 0x21;

/// Display off (0x28)
///
/// Frame memory output is disabled; memory contents are kept.
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Memory addressing commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start (MSB), start (LSB), end (MSB), end (LSB)]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Page (row) address set (0x2B)
///
/// Requires 4 bytes: [start (MSB), start (LSB), end (MSB), end (LSB)]
pub const PAGE_ADDRESS_SET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Followed by pixel data for the current window.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory access control (0x36)
///
/// Requires 1 byte, see the `MADCTL_*` bits.
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Pixel format set (0x3A)
///
/// Requires 1 byte, see [`PIXEL_FORMAT_16BIT`].
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

// Parameter values

/// 16 bits per pixel for both RGB and MCU interfaces
pub const PIXEL_FORMAT_16BIT: u8 = 0x55;

/// MADCTL: row address order
pub const MADCTL_MY: u8 = 0x80;

/// MADCTL: column address order
pub const MADCTL_MX: u8 = 0x40;

/// MADCTL: row/column exchange
pub const MADCTL_MV: u8 = 0x20;

/// MADCTL: vertical refresh order
pub const MADCTL_ML: u8 = 0x10;

/// MADCTL: BGR subpixel order
pub const MADCTL_BGR: u8 = 0x08;

/// MADCTL: horizontal refresh order
pub const MADCTL_MH: u8 = 0x04;

// Timing, in milliseconds

/// Delay after [`SOFT_RESET`]
pub const SOFT_RESET_DELAY_MS: u32 = 5;

/// Delay after [`SLEEP_OUT`], and after a hardware reset
pub const SLEEP_OUT_DELAY_MS: u32 = 120;

/// Delay after [`SLEEP_IN`]
pub const SLEEP_IN_DELAY_MS: u32 = 5;
