//! Core display operations
//!
//! [`Display`] owns the bus interface and the drawing state, and turns logical
//! drawing requests into address-window writes. Shapes live in
//! [`primitives`](crate::primitives) and text in [`text`](crate::text); both are
//! built on the window and span helpers defined here.
//!
//! Every public drawing call validates all of its arguments before the first byte
//! goes out, so an `Err` other than [`Error::Interface`] means nothing was sent.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    COLUMN_ADDRESS_SET, DISPLAY_OFF, DISPLAY_ON, INVERSION_OFF, INVERSION_ON,
    MEMORY_ACCESS_CONTROL, MEMORY_WRITE, NORMAL_MODE_ON, PAGE_ADDRESS_SET, PIXEL_FORMAT_16BIT,
    PIXEL_FORMAT_SET, SLEEP_IN, SLEEP_IN_DELAY_MS, SLEEP_OUT, SLEEP_OUT_DELAY_MS, SOFT_RESET,
    SOFT_RESET_DELAY_MS,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::{logical_size, physical_rect, to_logical};

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Size of the stack buffer pixel data is streamed through, in bytes
const CHUNK_BYTES: usize = 128;

/// Mutable drawing state owned by a [`Display`]
///
/// Only changed through the display's setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverState {
    pub(crate) rotation: Rotation,
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) cursor: (i32, i32),
    pub(crate) text_wrap: bool,
    pub(crate) text_transparent: bool,
}

impl DriverState {
    fn new(config: &Config) -> Self {
        Self {
            rotation: config.rotation,
            foreground: config.foreground,
            background: config.background,
            cursor: (0, 0),
            text_wrap: true,
            text_transparent: false,
        }
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current foreground color
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Current background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Current text cursor
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Whether text wraps at the right edge
    pub fn text_wrap(&self) -> bool {
        self.text_wrap
    }

    /// Whether text leaves glyph background pixels untouched
    pub fn text_transparent(&self) -> bool {
        self.text_transparent
    }
}

/// Core display driver for ILI9341
///
/// Owns the bus interface and the [`DriverState`]. Pass `&mut interface` instead
/// of `interface` to keep ownership of the bus on the caller's side.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    config: Config,
    /// Drawing state
    pub(crate) state: DriverState,
    /// Whether the controller is in sleep mode
    is_sleeping: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the panel until [`Display::init`] or a drawing call.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            state: DriverState::new(&config),
            config,
            is_sleeping: true,
        }
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }

    /// Perform hardware reset, software reset, and initialization
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "init {}x{} panel, madctl={:#04x}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.madctl()
        );
        self.interface.reset(delay);

        self.send_command(SOFT_RESET)?;
        delay.delay_ms(SOFT_RESET_DELAY_MS);

        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        self.is_sleeping = false;

        self.send_command(PIXEL_FORMAT_SET)?;
        self.send_data(&[PIXEL_FORMAT_16BIT])?;

        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[self.config.madctl()])?;

        let inversion = if self.config.inverted {
            INVERSION_ON
        } else {
            INVERSION_OFF
        };
        self.send_command(inversion)?;
        self.send_command(NORMAL_MODE_ON)?;
        self.send_command(DISPLAY_ON)?;

        Ok(())
    }

    /// Enter sleep mode
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("sleep in");
        self.send_command(SLEEP_IN)?;
        delay.delay_ms(SLEEP_IN_DELAY_MS);
        self.is_sleeping = true;
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("sleep out");
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        self.is_sleeping = false;
        Ok(())
    }

    /// Whether the controller is asleep (or not yet initialized)
    pub fn is_sleeping(&self) -> bool {
        self.is_sleeping
    }

    /// Turn panel output on or off; frame memory is kept either way
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        log::debug!("display on: {on}");
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Enable or disable color inversion
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        log::debug!("inverted: {inverted}");
        self.send_command(if inverted { INVERSION_ON } else { INVERSION_OFF })
    }

    /// Get physical panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the drawing state
    pub fn state(&self) -> &DriverState {
        &self.state
    }

    /// Pack 8-bit channels into the panel's color format
    pub const fn pack_color(r: u8, g: u8, b: u8) -> Color {
        Color::new(r, g, b)
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.state.rotation
    }

    /// Set rotation
    ///
    /// Logical width and height swap for 90 and 270 degrees. The cursor is kept
    /// as-is and may fall outside the new frame.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        log::debug!("rotation {:?} -> {:?}", self.state.rotation, rotation);
        self.state.rotation = rotation;
    }

    /// Set rotation from a quarter-turn index
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRotation` unless `index` is 0, 1, 2 or 3.
    pub fn set_rotation_index(&mut self, index: u8) -> DisplayResult<I> {
        let rotation = Rotation::try_from(index)?;
        self.set_rotation(rotation);
        Ok(())
    }

    /// Logical width in the current rotation
    pub fn width(&self) -> u16 {
        self.size().0
    }

    /// Logical height in the current rotation
    pub fn height(&self) -> u16 {
        self.size().1
    }

    /// Logical `(width, height)` in the current rotation
    pub fn size(&self) -> (u16, u16) {
        logical_size(self.config.dimensions, self.state.rotation)
    }

    /// Set the foreground (draw and text) color
    pub fn set_foreground(&mut self, color: Color) {
        self.state.foreground = color;
    }

    /// Set the background color used by [`Display::clear_screen`] and text
    pub fn set_background(&mut self, color: Color) {
        self.state.background = color;
    }

    /// Set text colors in one call, keeping the background if `None`
    pub fn set_text_color(&mut self, foreground: Color, background: Option<Color>) {
        self.state.foreground = foreground;
        if let Some(background) = background {
            self.state.background = background;
        }
    }

    /// Current foreground color
    pub fn foreground(&self) -> Color {
        self.state.foreground
    }

    /// Current background color
    pub fn background(&self) -> Color {
        self.state.background
    }

    /// Move the text cursor
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the point is outside the logical frame.
    pub fn set_cursor(&mut self, x: i32, y: i32) -> DisplayResult<I> {
        self.check_point(x, y)?;
        self.state.cursor = (x, y);
        Ok(())
    }

    /// Current text cursor
    pub fn cursor(&self) -> (i32, i32) {
        self.state.cursor
    }

    /// Enable or disable wrapping text at the right edge
    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.state.text_wrap = wrap;
    }

    /// When set, text only writes glyph pixels and leaves the cell background alone
    pub fn set_text_transparent(&mut self, transparent: bool) {
        self.state.text_transparent = transparent;
    }

    /// Fill the whole panel with the background color
    pub fn clear_screen(&mut self) -> DisplayResult<I> {
        self.fill_screen(self.state.background)
    }

    /// Fill the whole panel with `color`, leaving the background color unchanged
    pub fn fill_screen(&mut self, color: Color) -> DisplayResult<I> {
        let Dimensions { width, height } = self.config.dimensions;
        self.set_window(0, 0, width.saturating_sub(1), height.saturating_sub(1))?;
        self.stream_color(color, self.config.dimensions.pixel_count())
    }

    /// Draw a single pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the point is outside the logical frame.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        let (x, y) = self.check_point(x, y)?;
        self.write_pixel(x, y, color)
    }

    /// Validate a logical point, returning it as unsigned coordinates
    pub(crate) fn check_point(&self, x: i32, y: i32) -> Result<(u16, u16), Error<I>> {
        let (w, h) = self.size();
        if x < 0 || y < 0 || x >= i32::from(w) || y >= i32::from(h) {
            log::warn!("rejected point ({x}, {y}) outside {w}x{h}");
            return Err(Error::OutOfBounds { x, y });
        }
        Ok((x as u16, y as u16))
    }

    /// Validate a logical rectangle: positive size, fully inside the frame
    pub(crate) fn check_rect(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<(u16, u16, u16, u16), Error<I>> {
        if w <= 0 || h <= 0 {
            log::warn!("rejected rectangle size {w}x{h}");
            return Err(Error::InvalidSize { w, h });
        }
        let (x0, y0) = self.check_point(x, y)?;
        self.check_point(x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        Ok((x0, y0, w as u16, h as u16))
    }

    /// Write one already-validated logical pixel
    pub(crate) fn write_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        self.fill_span(x, y, 1, 1, color)
    }

    /// Fill an already-validated logical rectangle with one color
    pub(crate) fn fill_span(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> DisplayResult<I> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let (x0, y0, x1, y1) =
            physical_rect(x, y, w, h, self.config.dimensions, self.state.rotation);
        self.set_window(x0, y0, x1, y1)?;
        self.stream_color(color, w as u32 * h as u32)
    }

    /// Write an already-validated logical rectangle whose pixel colors come from `pixel`
    ///
    /// `pixel` receives offsets relative to `(x, y)`. Pixels are produced in the
    /// panel's scan order, whatever the rotation.
    pub(crate) fn write_area<F>(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        mut pixel: F,
    ) -> DisplayResult<I>
    where
        F: FnMut(u16, u16) -> Color,
    {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let panel = self.config.dimensions;
        let rotation = self.state.rotation;
        let order = self.config.byte_order;
        let (x0, y0, x1, y1) = physical_rect(x, y, w, h, panel, rotation);
        self.set_window(x0, y0, x1, y1)?;
        self.send_command(MEMORY_WRITE)?;

        let mut buf = [0u8; CHUNK_BYTES];
        let mut len = 0;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let (lx, ly) = to_logical(px, py, panel, rotation);
                let bytes = pixel(lx - x, ly - y).to_bytes(order);
                buf[len] = bytes[0];
                buf[len + 1] = bytes[1];
                len += 2;
                if len == CHUNK_BYTES {
                    self.send_data(&buf)?;
                    len = 0;
                }
            }
        }
        if len > 0 {
            self.send_data(&buf[..len])?;
        }
        Ok(())
    }

    /// Set the physical address window (inclusive)
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        log::trace!("window ({x0}, {y0})..=({x1}, {y1})");
        let [xs_hi, xs_lo] = x0.to_be_bytes();
        let [xe_hi, xe_lo] = x1.to_be_bytes();
        let [ys_hi, ys_lo] = y0.to_be_bytes();
        let [ye_hi, ye_lo] = y1.to_be_bytes();

        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.send_command(PAGE_ADDRESS_SET)?;
        self.send_data(&[ys_hi, ys_lo, ye_hi, ye_lo])?;
        Ok(())
    }

    /// Start a memory write and send `count` pixels of one color
    fn stream_color(&mut self, color: Color, count: u32) -> DisplayResult<I> {
        let bytes = color.to_bytes(self.config.byte_order);
        let mut buf = [0u8; CHUNK_BYTES];
        for pair in buf.chunks_exact_mut(2) {
            pair.copy_from_slice(&bytes);
        }

        self.send_command(MEMORY_WRITE)?;
        let mut remaining = count as usize * 2;
        while remaining > 0 {
            let n = remaining.min(CHUNK_BYTES);
            self.send_data(&buf[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
