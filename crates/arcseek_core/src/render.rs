//! Rendering adapter data
//!
//! The engine never draws. A painter calls
//! [`CircularRangeSeekBar::render_snapshot`] and turns the snapshot into
//! toolkit-specific draw calls: the background track, the highlighted
//! selection between the thumbs, and the thumb images.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{sweep, Point};
use crate::seek_bar::CircularRangeSeekBar;
use crate::thumb::{Thumb, ThumbLayout};

/// Square bounds of the track's stroke path
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// An arc within [`ArcBounds`], drawn clockwise from `start_angle`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub bounds: ArcBounds,
    pub start_angle: f64,
    pub sweep: f64,
}

/// Background track shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Track {
    /// Full-circle track
    Circle { center: Point, radius: f32 },
    /// Partial track leaving a gap
    Arc(ArcSegment),
}

/// A thumb to draw
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThumbSprite {
    pub thumb: Thumb,
    pub layout: ThumbLayout,
}

/// Everything a painter needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub track: Track,
    /// Highlighted range between the thumbs; absent in single-thumb mode
    pub selection: Option<ArcSegment>,
    /// Visible thumbs, thumb 1 first
    pub thumbs: SmallVec<[ThumbSprite; 2]>,
    pub pressed: bool,
}

impl RenderSnapshot {
    /// Capture the current state of a seek bar
    pub fn capture(bar: &CircularRangeSeekBar) -> Self {
        let metrics = bar.metrics();
        let geometry = bar.geometry();
        let config = bar.config();

        // Inset so the stroke runs through the middle of the thumbs
        let inset = metrics.thumb.height / 2.0;
        let bounds = ArcBounds {
            left: inset,
            top: inset,
            right: metrics.size - inset,
            bottom: metrics.size - inset,
        };

        let track = if geometry.is_full_circle() {
            Track::Circle {
                center: metrics.center(),
                radius: metrics.track_radius(),
            }
        } else {
            Track::Arc(ArcSegment {
                bounds,
                start_angle: geometry.start_angle(),
                sweep: geometry.arc_span(),
            })
        };

        let selection = (!config.use_one_thumb).then(|| ArcSegment {
            bounds,
            start_angle: bar.angle1(),
            sweep: sweep(bar.angle1(), bar.angle2()),
        });

        let mut thumbs = SmallVec::new();
        thumbs.push(ThumbSprite {
            thumb: Thumb::First,
            layout: bar.thumb_layout(Thumb::First),
        });
        if !config.use_one_thumb {
            thumbs.push(ThumbSprite {
                thumb: Thumb::Second,
                layout: bar.thumb_layout(Thumb::Second),
            });
        }

        Self {
            track,
            selection,
            thumbs,
            pressed: bar.is_pressed(),
        }
    }
}
