//! Coordinate rotation utilities
//!
//! The panel is always scanned in its native orientation; rotation is applied in
//! software by mapping every logical coordinate through [`to_physical`] before
//! it is addressed. All primitives go through this one transform.
//!
//! ## Rotation Modes
//!
//! For a panel `W` columns by `H` rows:
//!
//! | Rotation  | Logical size | Logical (x, y) lands on |
//! |-----------|--------------|-------------------------|
//! | Rotate0   | W x H        | (x, y)                  |
//! | Rotate90  | H x W        | (W-1-y, x)              |
//! | Rotate180 | W x H        | (W-1-x, H-1-y)          |
//! | Rotate270 | H x W        | (y, H-1-x)              |
//!
//! ## Example
//!
//! ```
//! use ili9341::{rotation::{logical_size, to_physical}, Dimensions, Rotation};
//!
//! let panel = Dimensions::default(); // 240x320
//! assert_eq!(logical_size(panel, Rotation::Rotate90), (320, 240));
//!
//! // Logical origin sits in the panel's top-right corner after a quarter turn
//! assert_eq!(to_physical(0, 0, panel, Rotation::Rotate90), (239, 0));
//! ```

use crate::config::{Dimensions, Rotation};

/// Logical `(width, height)` seen by callers under `rotation`
pub fn logical_size(panel: Dimensions, rotation: Rotation) -> (u16, u16) {
    if rotation.is_transposed() {
        (panel.height, panel.width)
    } else {
        (panel.width, panel.height)
    }
}

/// Map a logical point to physical panel coordinates
///
/// The point must lie inside the logical frame; callers validate first.
pub fn to_physical(x: u16, y: u16, panel: Dimensions, rotation: Rotation) -> (u16, u16) {
    let (w, h) = (panel.width, panel.height);
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (w - 1 - y, x),
        Rotation::Rotate180 => (w - 1 - x, h - 1 - y),
        Rotation::Rotate270 => (y, h - 1 - x),
    }
}

/// Map a physical panel point back to logical coordinates
///
/// Inverse of [`to_physical`].
pub fn to_logical(px: u16, py: u16, panel: Dimensions, rotation: Rotation) -> (u16, u16) {
    let (w, h) = (panel.width, panel.height);
    match rotation {
        Rotation::Rotate0 => (px, py),
        Rotation::Rotate90 => (py, w - 1 - px),
        Rotation::Rotate180 => (w - 1 - px, h - 1 - py),
        Rotation::Rotate270 => (h - 1 - py, px),
    }
}

/// Inclusive physical window `(x0, y0, x1, y1)` covering a logical rectangle
///
/// `w` and `h` must be non-zero and the rectangle inside the logical frame.
pub fn physical_rect(
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    panel: Dimensions,
    rotation: Rotation,
) -> (u16, u16, u16, u16) {
    let (ax, ay) = to_physical(x, y, panel, rotation);
    let (bx, by) = to_physical(x + w - 1, y + h - 1, panel, rotation);
    (ax.min(bx), ay.min(by), ax.max(bx), ay.max(by))
}
