//! Scenario file handling
//!
//! A scenario is a TOML document describing a seek bar and a sequence of
//! steps to replay against it:
//!
//! ```toml
//! [config]
//! end_angle = 55.0
//! min_thumb_difference = 5
//!
//! [metrics]
//! size = 200.0
//! thumb = { width = 20.0, height = 20.0 }
//!
//! [initial]
//! progress1 = 0
//! progress2 = 50
//!
//! [[steps]]
//! type = "down_at"
//! angle = 270.0
//!
//! [[steps]]
//! type = "move"
//! x = 20.0
//! y = 60.0
//!
//! [[steps]]
//! type = "up"
//! ```

use anyhow::{Context, Result};
use arcseek_core::{
    angle_to_point, CircularRangeSeekBar, ContactEvent, Metrics, RangeConfig, Size,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scenario document
#[derive(Debug, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: RangeConfig,
    #[serde(default = "default_metrics")]
    pub metrics: Metrics,
    #[serde(default)]
    pub initial: Option<InitialProgress>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_metrics() -> Metrics {
    Metrics::new(200.0, Size::new(20.0, 20.0))
}

/// Starting progress values, applied before any step
#[derive(Debug, Deserialize, Serialize)]
pub struct InitialProgress {
    pub progress1: i32,
    #[serde(default)]
    pub progress2: Option<i32>,
}

/// One replayed action
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Contact down at control coordinates
    Down { x: f32, y: f32 },
    /// Contact move to control coordinates
    Move { x: f32, y: f32 },
    /// Contact down on the track line at an absolute angle
    DownAt { angle: f64 },
    /// Contact move along the track line to an absolute angle
    MoveAt { angle: f64 },
    /// Contact lifted
    Up,
    /// Gesture cancelled
    Cancel,
    /// Programmatic progress update
    SetProgress {
        progress1: i32,
        #[serde(default)]
        progress2: Option<i32>,
    },
    /// Change the start angle mid-scenario
    SetStartAngle { degrees: f64 },
    /// Change the end angle mid-scenario
    SetEndAngle { degrees: f64 },
}

impl Step {
    /// Contact event for input steps, resolving angles against `metrics`
    pub fn contact_event(&self, metrics: &Metrics) -> Option<ContactEvent> {
        match *self {
            Step::Down { x, y } => Some(ContactEvent::Down { x, y }),
            Step::Move { x, y } => Some(ContactEvent::Move { x, y }),
            Step::DownAt { angle } => {
                let p = track_point(metrics, angle);
                Some(ContactEvent::Down { x: p.0, y: p.1 })
            }
            Step::MoveAt { angle } => {
                let p = track_point(metrics, angle);
                Some(ContactEvent::Move { x: p.0, y: p.1 })
            }
            Step::Up => Some(ContactEvent::Up),
            Step::Cancel => Some(ContactEvent::Cancel),
            Step::SetProgress { .. } | Step::SetStartAngle { .. } | Step::SetEndAngle { .. } => {
                None
            }
        }
    }
}

/// Point on the track line at an absolute angle
fn track_point(metrics: &Metrics, angle: f64) -> (f32, f32) {
    let center = metrics.center();
    let radius = metrics.track_radius();
    let p = angle_to_point(angle, center.x, center.y, radius, radius);
    (p.x, p.y)
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a scenario from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        Ok(scenario)
    }

    /// Build the seek bar described by `config`, `metrics` and `initial`
    pub fn build_seek_bar(&self) -> Result<CircularRangeSeekBar> {
        let mut bar = CircularRangeSeekBar::with_config(self.config.clone())
            .context("Invalid [config] section")?;
        bar.set_metrics(self.metrics)
            .context("Invalid [metrics] section")?;

        if let Some(initial) = &self.initial {
            let progress2 = initial
                .progress2
                .unwrap_or(self.config.max_progress - 1);
            bar.set_progress(initial.progress1, progress2);
        }

        Ok(bar)
    }
}
