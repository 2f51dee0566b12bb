#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    Start,
    Stop,
    /// Rewind to `t = 0` and start.
    Reset,
}

/// Playback clock of an animation.
///
/// All state lives here and is passed around explicitly; `t` only moves on
/// [`tick`](Self::tick) and never passes `overall_time`.
#[derive(Debug, Clone)]
pub struct Transport {
    t: f64,
    running: bool,
    overall_time: f64,
    step: f64,
}

impl Transport {
    pub fn new(overall_time: f64, step: f64) -> Self {
        Self {
            t: 0.0,
            running: false,
            overall_time,
            step,
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.t >= self.overall_time
    }

    pub fn apply(&mut self, cmd: TransportCommand) {
        match cmd {
            TransportCommand::Start => self.running = true,
            TransportCommand::Stop => self.running = false,
            TransportCommand::Reset => {
                self.t = 0.0;
                self.running = true;
            }
        }
        tracing::debug!(target: "animation", ?cmd, t = self.t, running = self.running, "transport");
    }

    /// Advances one step, or stops once the end has been reached.
    /// Returns whether the transport is still running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.is_finished() {
            self.running = false;
        } else {
            self.t = (self.t + self.step).min(self.overall_time);
        }
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_transport_does_not_advance() {
        let mut transport = Transport::new(1.0, 0.25);
        assert!(!transport.tick());
        assert_eq!(transport.t(), 0.0);
    }

    #[test]
    fn test_runs_to_end_then_stops() {
        let mut transport = Transport::new(1.0, 0.3);
        transport.apply(TransportCommand::Start);

        let mut ticks = 0;
        while transport.tick() {
            ticks += 1;
        }

        // 0.3, 0.6, 0.9, then clamped to 1.0; the fifth tick stops.
        assert_eq!(ticks, 4);
        assert_eq!(transport.t(), 1.0);
        assert!(transport.is_finished());
        assert!(!transport.is_running());
    }

    #[test]
    fn test_stop_and_reset() {
        let mut transport = Transport::new(1.0, 0.5);
        transport.apply(TransportCommand::Start);
        transport.tick();
        transport.apply(TransportCommand::Stop);
        assert!(!transport.tick());
        assert_eq!(transport.t(), 0.5);

        transport.apply(TransportCommand::Reset);
        assert!(transport.is_running());
        assert_eq!(transport.t(), 0.0);
    }
}
