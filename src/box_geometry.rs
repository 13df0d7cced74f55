//! Bounding-box geometry for face detections.
//!
//! Boxes use the standard image convention `[left, top, right, bottom]` with
//! the y axis increasing downward. Every operation returns a fresh box;
//! nothing is mutated in place.

use crate::{Error, Result};
use opencv::core::Rect;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
///
/// A valid box satisfies `right >= left` and `bottom >= top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X coordinate of the left edge
    pub left: i32,
    /// Y coordinate of the top edge
    pub top: i32,
    /// X coordinate of the right edge
    pub right: i32,
    /// Y coordinate of the bottom edge
    pub bottom: i32,
}

impl BoundingBox {
    /// Create a box from its four edge coordinates
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent of the box
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent of the box
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Shift the box by an `(dx, dy)` offset
    #[must_use]
    pub const fn translated(&self, offset: (i32, i32)) -> Self {
        Self {
            left: self.left + offset.0,
            top: self.top + offset.1,
            right: self.right + offset.0,
            bottom: self.bottom + offset.1,
        }
    }

    /// Expand the box into the smallest enclosing square.
    ///
    /// The expansion is symmetric about the box center. When the size
    /// difference is odd the extra unit goes to the right edge (horizontal
    /// expansion) or the bottom edge (vertical expansion). Already-square
    /// boxes are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the result is not square.
    /// This is unreachable under the arithmetic above and documents the
    /// guarantee rather than correcting it.
    pub fn squared(&self) -> Result<Self> {
        let diff = self.height() - self.width();
        if diff == 0 {
            return Ok(*self);
        }

        let delta = diff.abs() / 2;
        let odd = diff.abs() % 2 == 1;

        let mut result = *self;
        if diff > 0 {
            // Narrow box, expand horizontally
            result.left -= delta;
            result.right += delta;
            if odd {
                result.right += 1;
            }
        } else {
            // Short box, expand vertically
            result.top -= delta;
            result.bottom += delta;
            if odd {
                result.bottom += 1;
            }
        }

        if result.width() != result.height() {
            return Err(Error::InvariantViolation(format!(
                "box {result:?} is not square after expansion"
            )));
        }
        Ok(result)
    }

    /// Check whether the box lies fully inside an image of the given size
    #[must_use]
    pub const fn is_within(&self, image_width: i32, image_height: i32) -> bool {
        self.left >= 0 && self.top >= 0 && self.right <= image_width && self.bottom <= image_height
    }

    /// View the box as an `OpenCV` rectangle
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width(), self.height())
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from(coords: [i32; 4]) -> Self {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }
}
