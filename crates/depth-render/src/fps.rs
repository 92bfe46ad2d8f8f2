use std::time::Instant;

/// Instantaneous frame rate from the interval between consecutive updates.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last: Instant,
    text: String,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            text: "FPS: ?".to_string(),
        }
    }

    /// Record a frame at `now` and return the label, e.g. `"FPS: 30"`.
    ///
    /// A zero interval keeps the previous label.
    pub fn update(&mut self, now: Instant) -> &str {
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        if dt > 0.0 {
            self.text = format!("FPS: {}", (1.0 / dt) as u64);
        }
        &self.text
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
