//! Display configuration types and builder

use embedded_graphics::mono_font::{MonoFont, ascii::FONT_6X10};

use crate::color::Color;
use crate::command::MADCTL_MX;
pub use crate::error::{BuilderError, InvalidRotation, MAX_COLUMNS, MAX_ROWS};

/// Physical panel dimensions, in the panel's native (unrotated) orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels)
    pub width: u16,
    /// Number of rows (height in pixels)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero, or if
    /// width > MAX_COLUMNS or height > MAX_ROWS.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total number of pixels on the panel
    pub fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

impl Default for Dimensions {
    /// The full 240x320 ILI9341 panel
    fn default() -> Self {
        Self {
            width: MAX_COLUMNS,
            height: MAX_ROWS,
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Whether this rotation swaps logical width and height
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// Quarter turns clockwise (0..=3)
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rotate0),
            1 => Ok(Self::Rotate90),
            2 => Ok(Self::Rotate180),
            3 => Ok(Self::Rotate270),
            other => Err(InvalidRotation(other)),
        }
    }
}

/// Byte order of a pixel on the wire
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// High byte first (what the ILI9341 expects over SPI)
    #[default]
    BigEndian,
    /// Low byte first
    LittleEndian,
}

/// Subpixel order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red-green-blue
    Rgb,
    /// Blue-green-red (most ILI9341 modules)
    #[default]
    Bgr,
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Copy)]
pub struct Config {
    /// Physical panel dimensions
    pub dimensions: Dimensions,
    /// Initial rotation
    pub rotation: Rotation,
    /// Subpixel order, sets the BGR bit of MADCTL
    pub color_order: ColorOrder,
    /// Pixel byte order on the wire
    pub byte_order: ByteOrder,
    /// MADCTL scan bits (without the BGR bit)
    pub memory_access_control: u8,
    /// Whether display inversion is enabled after init
    pub inverted: bool,
    /// Font used for text rendering
    pub font: &'static MonoFont<'static>,
    /// Initial foreground (draw and text) color
    pub foreground: Color,
    /// Initial background color
    pub background: Color,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("dimensions", &self.dimensions)
            .field("rotation", &self.rotation)
            .field("color_order", &self.color_order)
            .field("byte_order", &self.byte_order)
            .field("memory_access_control", &self.memory_access_control)
            .field("inverted", &self.inverted)
            .field("font", &self.font.character_size)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .finish()
    }
}

impl Config {
    /// MADCTL byte sent during init, scan bits plus the BGR bit
    pub fn madctl(&self) -> u8 {
        match self.color_order {
            ColorOrder::Rgb => self.memory_access_control & !crate::command::MADCTL_BGR,
            ColorOrder::Bgr => self.memory_access_control | crate::command::MADCTL_BGR,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().into_config()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ili9341::{Builder, ByteOrder, Color, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate90)
///     .byte_order(ByteOrder::BigEndian)
///     .foreground(Color::YELLOW)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.rotation, Rotation::Rotate90);
/// ```
#[must_use]
#[derive(Clone, Copy)]
pub struct Builder {
    /// Panel dimensions as requested, validated in `build`
    width: u16,
    height: u16,
    rotation: Rotation,
    color_order: ColorOrder,
    byte_order: ByteOrder,
    memory_access_control: u8,
    inverted: bool,
    font: &'static MonoFont<'static>,
    foreground: Color,
    background: Color,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            width: MAX_COLUMNS,
            height: MAX_ROWS,
            rotation: Rotation::Rotate0,
            color_order: ColorOrder::Bgr,
            byte_order: ByteOrder::BigEndian,
            // Column address order mirrored, the usual portrait scan for ILI9341 modules
            memory_access_control: MADCTL_MX,
            inverted: false,
            font: &FONT_6X10,
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.width = dims.width;
        self.height = dims.height;
        self
    }

    /// Set panel size without constructing [`Dimensions`] first
    ///
    /// Validation happens in [`Builder::build`].
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set initial rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set subpixel order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Set pixel byte order on the wire
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Set MADCTL scan bits
    ///
    /// The BGR bit is controlled by [`Builder::color_order`] and ignored here.
    pub fn memory_access_control(mut self, value: u8) -> Self {
        self.memory_access_control = value;
        self
    }

    /// Enable display inversion after init (needed by some IPS panels)
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Set the font used for text
    pub fn font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Set initial foreground color
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set initial background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    fn into_config(self) -> Config {
        Config {
            dimensions: Dimensions {
                width: self.width,
                height: self.height,
            },
            rotation: self.rotation,
            color_order: self.color_order,
            byte_order: self.byte_order,
            memory_access_control: self.memory_access_control,
            inverted: self.inverted,
            font: self.font,
            foreground: self.foreground,
            background: self.background,
        }
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if the panel size is out of range
    pub fn build(self) -> Result<Config, BuilderError> {
        Dimensions::new(self.width, self.height)?;
        Ok(self.into_config())
    }
}
