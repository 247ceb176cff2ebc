//! Fragment rectangles and their intersection with a canvas.

use serde::{Deserialize, Serialize};

/// A fragment rectangle addressed against a canvas.
///
/// Coordinates use a top-left origin with y growing downward, independent of
/// the bottom-up physical row order in storage. The offset may be negative or
/// otherwise reach outside the canvas; clipping is the codec's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// The intersection of a fragment rectangle with the canvas extent, clamped
/// into canvas coordinates. Half-open on both axes, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl FragmentRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has a non-empty intersection with the canvas.
    ///
    /// Strict-inequality boundary convention: the edge pixel at
    /// `x == canvas_width - 1` still overlaps, `x == canvas_width` does not.
    pub fn overlaps(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.x + self.width as i64 > 0
            && self.x < canvas_width as i64
            && self.y + self.height as i64 > 0
            && self.y < canvas_height as i64
    }

    /// Compute the clip rectangle against a canvas, or `None` if the
    /// intersection is empty.
    pub fn clip(&self, canvas_width: u32, canvas_height: u32) -> Option<ClipRect> {
        let x0 = self.x.max(0);
        let x1 = (self.x + self.width as i64).min(canvas_width as i64);
        let y0 = self.y.max(0);
        let y1 = (self.y + self.height as i64).min(canvas_height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(ClipRect {
            x0: x0 as u32,
            x1: x1 as u32,
            y0: y0 as u32,
            y1: y1 as u32,
        })
    }
}

impl ClipRect {
    /// Clipped width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Clipped height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}
