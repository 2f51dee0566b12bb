use anyhow::Result;
use serde::Serialize;

use super::core::PoseConfig;

/// One sampled instant of the animation.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub index: usize,
    pub t: f64,
    pub pose: PoseConfig,
}

#[derive(Debug, Default)]
pub struct FrameLog {
    frames: Vec<Frame>,
}

impl FrameLog {
    pub fn push(&mut self, frame: Frame) {
        tracing::trace!(index = frame.index, t = frame.t, "recording frame");
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            &self.frames,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}
