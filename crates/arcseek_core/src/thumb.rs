//! Thumb identity and placement
//!
//! A thumb is plain position data here. The engine decides where each thumb
//! sits; a rendering adapter reads [`ThumbLayout`] to draw it.

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};
use crate::geometry::{angle_to_point, normalize_360, Point, Size};

/// One of the two draggable handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thumb {
    /// Start of the range (progress 1)
    First,
    /// End of the range (progress 2), hidden in single-thumb mode
    Second,
}

/// Host-supplied dimensions
///
/// The engine cannot measure layout itself; the host reports the square
/// control size and the thumb image size before feeding input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Side length of the (square) control
    pub size: f32,
    /// Dimensions of one thumb image
    pub thumb: Size,
}

impl Metrics {
    pub fn new(size: f32, thumb: Size) -> Self {
        Self { size, thumb }
    }

    /// Reject negative or non-finite dimensions
    pub fn validate(&self) -> Result<()> {
        let values = [self.size, self.thumb.width, self.thumb.height];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(RangeError::InvalidMetrics(format!(
                "size {} with thumb {}x{}",
                self.size, self.thumb.width, self.thumb.height
            )));
        }
        Ok(())
    }

    /// Centre of the control
    pub fn center(&self) -> Point {
        let mid = self.size / 2.0;
        Point::new(mid, mid)
    }

    /// Outer radius of the touch annulus
    pub fn outer_radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Inner radius of the touch annulus, one thumb height inside the edge
    pub fn inner_radius(&self) -> f32 {
        self.outer_radius() - self.thumb.height
    }

    /// Radius of the track line, through the middle of the thumbs
    pub fn track_radius(&self) -> f32 {
        self.outer_radius() - self.thumb.height / 2.0
    }

    /// Compute where a thumb at `angle` is placed
    pub fn thumb_layout(&self, angle: f64, rotation_offset: f64) -> ThumbLayout {
        // Thumb top-left corners travel on an ellipse inset by the thumb size
        let mid_x = (self.size - self.thumb.width) / 2.0;
        let mid_y = (self.size - self.thumb.height) / 2.0;
        let top_left = angle_to_point(angle, mid_x, mid_y, mid_x, mid_y);
        let center = Point::new(
            top_left.x + self.thumb.width / 2.0,
            top_left.y + self.thumb.height / 2.0,
        );

        ThumbLayout {
            top_left,
            center,
            size: self.thumb,
            angle,
            rotation: angle - rotation_offset,
        }
    }
}

/// Placement of a thumb for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThumbLayout {
    /// Top-left corner of the thumb image
    pub top_left: Point,
    /// Centre of the thumb image, used for hit-testing
    pub center: Point,
    /// Thumb image size
    pub size: Size,
    /// Angle of the thumb on the track
    pub angle: f64,
    /// Rotation to apply to the thumb image, in degrees
    pub rotation: f64,
}

impl ThumbLayout {
    /// Rotation folded into `[0, 360)`
    pub fn normalized_rotation(&self) -> f64 {
        normalize_360(self.rotation)
    }
}
