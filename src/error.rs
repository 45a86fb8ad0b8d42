//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Every variant belongs to one [`ErrorKind`]. Validation errors are always
//! reported before anything is sent to the panel, so a rejected call leaves the
//! screen untouched.
//!
//! ## Example
//!
//! ```
//! use ili9341::{Builder, Dimensions, BuilderError, ErrorKind};
//!
//! // Zero-sized panel
//! let result = Builder::new().size(0, 320).build();
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Too large for the controller's frame memory
//! let result = Dimensions::new(480, 320);
//! assert!(result.is_err());
//! if let Err(err) = result {
//!     assert_eq!(err.kind(), ErrorKind::Configuration);
//! }
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns addressable by the ILI9341 frame memory
pub const MAX_COLUMNS: u16 = 240;

/// Maximum rows addressable by the ILI9341 frame memory
pub const MAX_ROWS: u16 = 320;

/// Broad classification of driver errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction parameters
    Configuration,
    /// Malformed geometric parameters (size, radius, rotation)
    InvalidArgument,
    /// Coordinates outside the logical frame
    OutOfBounds,
    /// The bus write did not complete
    Io,
}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// Never retried by the driver.
    Interface(I::Error),
    /// A coordinate lies outside the current logical frame
    OutOfBounds {
        /// X coordinate
        x: i32,
        /// Y coordinate
        y: i32,
    },
    /// Width or height is zero or negative
    InvalidSize {
        /// Width
        w: i32,
        /// Height
        h: i32,
    },
    /// Radius is negative, or too large for the rectangle it rounds
    InvalidRadius {
        /// Requested radius
        radius: i32,
    },
    /// Rotation index outside 0..=3
    InvalidRotation(u8),
}

impl<I: DisplayInterface> Error<I> {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Interface(_) => ErrorKind::Io,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::InvalidSize { .. } | Self::InvalidRadius { .. } | Self::InvalidRotation(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::OutOfBounds { x, y } => write!(f, "Point ({x}, {y}) is out of bounds"),
            Self::InvalidSize { w, h } => write!(f, "Invalid size: {w}x{h}"),
            Self::InvalidRadius { radius } => write!(f, "Invalid radius: {radius}"),
            Self::InvalidRotation(index) => write!(f, "Invalid rotation: {index}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Rotation index outside 0..=3
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRotation(pub u8);

impl core::fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid rotation {} (expected 0..=3)", self.0)
    }
}

impl core::error::Error for InvalidRotation {}

impl<I: DisplayInterface> From<InvalidRotation> for Error<I> {
    fn from(err: InvalidRotation) -> Self {
        Self::InvalidRotation(err.0)
    }
}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl BuilderError {
    /// Classify this error, always [`ErrorKind::Configuration`]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (must be 1..={MAX_COLUMNS} x 1..={MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
