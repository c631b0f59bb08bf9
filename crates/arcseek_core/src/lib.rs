//! arcseek Core
//!
//! The engine behind a dual-thumb circular range selector:
//!
//! - **Arc Geometry**: conversions between progress, angle and touch position
//!   on a full circle or a partial arc
//! - **Range State Machine**: hit-testing, drag validation and ordered,
//!   non-overlapping thumbs on a wrap-around domain
//! - **Render Snapshot**: plain data for whatever toolkit draws the control
//!
//! The crate does no drawing, measuring or event-loop plumbing. The host
//! reports metrics, forwards contact events and repaints when asked.
//!
//! # Example
//!
//! ```rust
//! use arcseek_core::{seek_bar, ContactEvent, Metrics, Size};
//!
//! let mut bar = seek_bar()
//!     .max_progress(100)
//!     .end_angle(55.0)
//!     .metrics(Metrics::new(200.0, Size::new(20.0, 20.0)))
//!     .on_change(|_bar, change| {
//!         println!("{} - {}, from user: {}", change.progress1, change.progress2, change.from_user);
//!     })
//!     .build()
//!     .unwrap();
//!
//! bar.set_progress(0, 50);
//!
//! let response = bar.handle_event(&ContactEvent::Down { x: 100.0, y: 10.0 });
//! assert!(response.consumed);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod listener;
pub mod render;
pub mod seek_bar;
pub mod thumb;

pub use config::RangeConfig;
pub use error::{RangeError, Result};
pub use events::{ContactEvent, DragEvent, DragState, Response};
pub use geometry::{
    angle_to_point, arc_span, normalize_360, point_to_angle, sweep, wrap_progress, ArcGeometry,
    Point, Size,
};
pub use listener::{ProgressChange, ProgressListener};
pub use render::{ArcBounds, ArcSegment, RenderSnapshot, ThumbSprite, Track};
pub use seek_bar::{seek_bar, CircularRangeSeekBar, SeekBarBuilder};
pub use thumb::{Metrics, Thumb, ThumbLayout};
