use std::time::{Duration, Instant};

/// Shared state for the HTTP surface. The engine itself is stateless (every
/// request carries its own snapshot), so this only tracks process liveness.
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
