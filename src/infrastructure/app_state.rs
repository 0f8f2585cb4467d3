use std::time::Instant;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process start reference, captured once at construction and read-only
    /// thereafter
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Elapsed wall-clock seconds since the process started
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_non_negative() {
        let state = AppState::new();
        assert!(state.uptime_seconds() >= 0.0);
    }

    #[test]
    fn uptime_is_monotonic() {
        let state = AppState::new();
        let first = state.uptime_seconds();
        let second = state.uptime_seconds();
        assert!(second >= first);
    }
}
