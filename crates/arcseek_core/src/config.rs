//! Range configuration
//!
//! [`RangeConfig`] holds every externally settable knob of a circular range
//! control. It deserializes from partial documents (missing keys take the
//! defaults below) and validates eagerly so that a bad value is reported when
//! it is set, not when the first touch arrives.
//!
//! ```
//! use arcseek_core::RangeConfig;
//!
//! let config = RangeConfig::new()
//!     .max_progress(100)
//!     .end_angle(55.0)
//!     .min_thumb_difference(5);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.geometry().arc_span(), 290.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};
use crate::geometry::ArcGeometry;

/// Default number of progress steps around the track
pub const DEFAULT_MAX_PROGRESS: i32 = 100;

/// Default angle of progress 0
pub const DEFAULT_START_ANGLE: f64 = 125.0;

/// Default minimum gap between the two thumbs
pub const DEFAULT_MIN_THUMB_DIFFERENCE: i32 = 1;

/// Default offset subtracted from a thumb's angle to orient its image
pub const DEFAULT_THUMB_ROTATION_OFFSET: f64 = 62.0;

/// Circular range configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Exclusive upper bound of the progress domain
    pub max_progress: i32,
    /// Angle (degrees) at which progress 0 sits
    pub start_angle: f64,
    /// Angle (degrees) at which the track ends; equal to `start_angle` for a
    /// full circle
    pub end_angle: f64,
    /// Minimum progress gap between thumb 1 and thumb 2 during drags
    pub min_thumb_difference: i32,
    /// Hide and disable the second thumb
    pub use_one_thumb: bool,
    /// Degrees subtracted from a thumb's angle to get its image rotation
    pub thumb_rotation_offset: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            max_progress: DEFAULT_MAX_PROGRESS,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_START_ANGLE,
            min_thumb_difference: DEFAULT_MIN_THUMB_DIFFERENCE,
            use_one_thumb: false,
            thumb_rotation_offset: DEFAULT_THUMB_ROTATION_OFFSET,
        }
    }
}

impl RangeConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of progress steps
    pub fn max_progress(mut self, max_progress: i32) -> Self {
        self.max_progress = max_progress;
        self
    }

    /// Set the start angle
    pub fn start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Set the end angle
    pub fn end_angle(mut self, degrees: f64) -> Self {
        self.end_angle = degrees;
        self
    }

    /// Set the minimum thumb gap
    pub fn min_thumb_difference(mut self, difference: i32) -> Self {
        self.min_thumb_difference = difference;
        self
    }

    /// Enable or disable single-thumb mode
    pub fn use_one_thumb(mut self, one_thumb: bool) -> Self {
        self.use_one_thumb = one_thumb;
        self
    }

    /// Set the thumb image rotation offset
    pub fn thumb_rotation_offset(mut self, degrees: f64) -> Self {
        self.thumb_rotation_offset = degrees;
        self
    }

    /// Check every precondition, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        validate_max_progress(self.max_progress)?;
        validate_angle("start_angle", self.start_angle)?;
        validate_angle("end_angle", self.end_angle)?;
        validate_min_thumb_difference(self.min_thumb_difference)?;
        validate_angle("thumb_rotation_offset", self.thumb_rotation_offset)?;
        Ok(())
    }

    /// Minimum thumb gap actually enforced; always 0 in single-thumb mode
    pub fn effective_min_thumb_difference(&self) -> i32 {
        if self.use_one_thumb {
            0
        } else {
            self.min_thumb_difference
        }
    }

    /// Progress/angle mapping for this configuration
    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry::new(self.start_angle, self.end_angle, self.max_progress)
    }
}

pub(crate) fn validate_max_progress(max_progress: i32) -> Result<()> {
    if max_progress <= 0 {
        return Err(RangeError::InvalidMaxProgress(max_progress));
    }
    Ok(())
}

pub(crate) fn validate_min_thumb_difference(difference: i32) -> Result<()> {
    if difference < 0 {
        return Err(RangeError::NegativeMinThumbDifference(difference));
    }
    Ok(())
}

pub(crate) fn validate_angle(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RangeError::NonFiniteAngle { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RangeConfig::default();
        assert_eq!(config.max_progress, 100);
        assert_eq!(config.start_angle, 125.0);
        assert_eq!(config.end_angle, 125.0);
        assert_eq!(config.min_thumb_difference, 1);
        assert!(!config.use_one_thumb);
        assert!(config.validate().is_ok());
        assert!(config.geometry().is_full_circle());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            RangeConfig::new().max_progress(0).validate(),
            Err(RangeError::InvalidMaxProgress(0))
        );
        assert_eq!(
            RangeConfig::new().min_thumb_difference(-2).validate(),
            Err(RangeError::NegativeMinThumbDifference(-2))
        );
        assert!(matches!(
            RangeConfig::new().start_angle(f64::NAN).validate(),
            Err(RangeError::NonFiniteAngle {
                name: "start_angle",
                ..
            })
        ));
        assert!(RangeConfig::new()
            .end_angle(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_effective_min_thumb_difference() {
        let config = RangeConfig::new().min_thumb_difference(5);
        assert_eq!(config.effective_min_thumb_difference(), 5);
        assert_eq!(
            config.use_one_thumb(true).effective_min_thumb_difference(),
            0
        );
    }

    #[test]
    fn test_partial_toml() {
        let config: RangeConfig = toml::from_str(
            r#"
            end_angle = 55.0
            min_thumb_difference = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.max_progress, 100);
        assert_eq!(config.start_angle, 125.0);
        assert_eq!(config.end_angle, 55.0);
        assert_eq!(config.min_thumb_difference, 5);
        assert_eq!(config.geometry().arc_span(), 290.0);
    }
}
