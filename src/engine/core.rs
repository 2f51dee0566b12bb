use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use versor::{DVec3, EulerAngles, Pose};

/// A pose as written in config files: translation plus X-Y-Z Euler angles
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseConfig {
    pub translation: [f64; 3],
    pub euler_degrees: [f64; 3],
}

impl PoseConfig {
    pub fn to_pose(&self) -> Pose {
        let [phi, theta, psi] = self.euler_degrees;
        Pose::new(
            DVec3::from_array(self.translation),
            EulerAngles::from_degrees(phi, theta, psi),
        )
    }

    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            translation: pose.translation.to_array(),
            euler_degrees: pose.orientation.to_degrees(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of the motion in seconds.
    pub overall_time: f64,
    /// Animation time advanced per tick.
    pub step: f64,
    /// Wall-clock time between ticks when `realtime` is set.
    pub frame_interval_ms: u64,
    pub realtime: bool,
    /// Number of times the motion is played; each replay rewinds to `t = 0`.
    pub loops: u32,
    /// Animation time at which playback is stopped early.
    pub stop_at: Option<f64>,
    pub start: PoseConfig,
    pub end: PoseConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            overall_time: 1.5,
            step: 0.02,
            frame_interval_ms: 25,
            realtime: false,
            loops: 1,
            stop_at: None,
            start: PoseConfig {
                translation: [0.0, 0.0, 0.0],
                euler_degrees: [10.0, 10.0, 45.0],
            },
            end: PoseConfig {
                translation: [10.0, 4.0, 2.0],
                euler_degrees: [45.0, -45.0, -30.0],
            },
        }
    }
}

impl AnimationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_ron(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn from_ron(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.overall_time > 0.0 && self.overall_time.is_finite(),
            "overall_time must be positive, got {}",
            self.overall_time
        );
        ensure!(
            self.step > 0.0 && self.step.is_finite(),
            "step must be positive, got {}",
            self.step
        );
        ensure!(self.loops >= 1, "loops must be at least 1");
        if let Some(stop_at) = self.stop_at {
            ensure!(
                stop_at >= 0.0 && stop_at.is_finite(),
                "stop_at must be non-negative, got {}",
                stop_at
            );
        }
        Ok(())
    }
}
