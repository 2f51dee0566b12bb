pub mod core;
pub mod scene;
pub mod transport;

use std::time::Duration;

use anyhow::{Context, Result};
use self::core::{AnimationConfig, PoseConfig};
use self::scene::{Frame, FrameLog};
use self::transport::{Transport, TransportCommand};
use versor::{interpolate_pose, Pose};

/// Plays an animation from `start` to `end` and records every frame.
pub struct AnimationApp {
    config: AnimationConfig,
    start: Pose,
    end: Pose,
    transport: Transport,
    frames: FrameLog,
}

impl AnimationApp {
    pub fn new(config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            start: config.start.to_pose(),
            end: config.end.to_pose(),
            transport: Transport::new(config.overall_time, config.step),
            frames: FrameLog::default(),
            config,
        })
    }

    pub fn frames(&self) -> &FrameLog {
        &self.frames
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            target: "animation",
            overall_time = self.config.overall_time,
            step = self.config.step,
            loops = self.config.loops,
            "animation starting"
        );

        self.transport.apply(TransportCommand::Start);
        for pass in 1..=self.config.loops {
            if pass > 1 {
                self.transport.apply(TransportCommand::Reset);
            }
            if !self.play()? {
                break;
            }
        }

        let final_t = self.frames.last().map(|frame| frame.t);
        tracing::info!(target: "animation", frames = self.frames.len(), ?final_t, "animation finished");
        Ok(())
    }

    /// Plays from the current `t` until the transport stops. Returns whether
    /// the end of the motion was reached.
    fn play(&mut self) -> Result<bool> {
        self.render_frame()?;
        loop {
            if self.stop_requested() {
                self.transport.apply(TransportCommand::Stop);
            }
            if !self.transport.tick() {
                break;
            }
            self.render_frame()?;
            if self.config.realtime {
                std::thread::sleep(Duration::from_millis(self.config.frame_interval_ms));
            }
        }

        let finished = self.transport.is_finished();
        if !finished {
            tracing::info!(target: "animation", t = self.transport.t(), "animation stopped");
        }
        Ok(finished)
    }

    fn stop_requested(&self) -> bool {
        self.config
            .stop_at
            .is_some_and(|stop_at| self.transport.t() >= stop_at)
    }

    fn render_frame(&mut self) -> Result<()> {
        let t = self.transport.t();
        let pose = interpolate_pose(&self.start, &self.end, self.config.overall_time, t)
            .with_context(|| format!("interpolating pose at t = {t}"))?;

        let index = self.frames.len();
        let [x, y, z] = pose.translation.to_array();
        let [phi, theta, psi] = pose.orientation.to_degrees();
        tracing::info!(target: "animation", index, t, x, y, z, phi, theta, psi, "frame");

        self.frames.push(Frame {
            index,
            t,
            pose: PoseConfig::from_pose(&pose),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_animation_ends_at_end_pose() {
        let config = AnimationConfig::default();
        let mut app = AnimationApp::new(config.clone()).unwrap();
        app.run().unwrap();

        let frames = app.frames();
        // t = 0 plus one frame per step up to overall_time.
        assert!(frames.len() >= 76);
        assert_eq!(frames.frames()[0].t, 0.0);

        let last = frames.last().unwrap();
        assert_eq!(last.t, config.overall_time);
        assert_eq!(last.pose.translation, config.end.translation);

        let end = config.end.to_pose().orientation.to_matrix().unwrap();
        let reached = last.pose.to_pose().orientation.to_matrix().unwrap();
        for c in 0..3 {
            assert!((end.col(c) - reached.col(c)).length() < 1e-6);
        }
    }

    #[test]
    fn test_invalid_pose_fails_the_run() {
        let mut config = AnimationConfig::default();
        config.end.euler_degrees = [0.0, 100.0, 0.0];

        let mut app = AnimationApp::new(config).unwrap();
        let err = app.run().unwrap_err();
        assert!(err.to_string().contains("interpolating pose"));
    }

    #[test]
    fn test_frames_serialize_to_ron() {
        let mut app = AnimationApp::new(AnimationConfig {
            overall_time: 0.1,
            step: 0.05,
            ..AnimationConfig::default()
        })
        .unwrap();
        app.run().unwrap();

        let text = app.frames().to_ron().unwrap();
        assert!(text.contains("euler_degrees"));
        assert_eq!(app.frames().len(), 3);
    }

    #[test]
    fn test_loops_replay_from_start() {
        let mut app = AnimationApp::new(AnimationConfig {
            overall_time: 0.1,
            step: 0.05,
            loops: 2,
            ..AnimationConfig::default()
        })
        .unwrap();
        app.run().unwrap();

        // Each pass samples t = 0, 0.05 and 0.1.
        let frames = app.frames().frames();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[3].t, 0.0);
        assert_eq!(frames[3].index, 3);
        assert_eq!(frames[5].t, 0.1);
    }

    #[test]
    fn test_stop_at_ends_playback_early() {
        let mut app = AnimationApp::new(AnimationConfig {
            overall_time: 0.2,
            step: 0.05,
            loops: 3,
            stop_at: Some(0.05),
            ..AnimationConfig::default()
        })
        .unwrap();
        app.run().unwrap();

        // Stopped after t = 0.05; later loops are not played.
        assert_eq!(app.frames().len(), 2);
        assert_eq!(app.frames().last().unwrap().t, 0.05);
    }
}
