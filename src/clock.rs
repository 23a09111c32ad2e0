/// Simulation clock.  Accumulates elapsed seconds; never moves backwards.

use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Clock {
    current: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed` seconds and return the new current time.
    ///
    /// Negative or non-finite input is clamped to zero so a bad host timer
    /// can never rewind physics.
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        let elapsed = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            if elapsed != 0.0 {
                debug!(elapsed, "clamping invalid elapsed time to zero");
            }
            0.0
        };
        self.current += elapsed;
        self.current
    }

    pub fn current_time(&self) -> f64 {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}
