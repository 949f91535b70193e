use std::env;

pub const DEFAULT_REQUESTS_PER_CYCLE: u32 = 1;

#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Maximum requests resolved per tick; 0 drains the whole queue.
    pub requests_per_cycle: u32,
    /// Queue depth cap; `None` leaves the queue unbounded.
    pub max_pending: Option<usize>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            requests_per_cycle: DEFAULT_REQUESTS_PER_CYCLE,
            max_pending: None,
        }
    }
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        let requests_per_cycle = env::var("NAVSCHED_REQUESTS_PER_CYCLE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_REQUESTS_PER_CYCLE);
        let max_pending = env::var("NAVSCHED_MAX_PENDING")
            .ok()
            .and_then(|s| s.parse::<usize>().ok());

        Self {
            requests_per_cycle,
            max_pending,
        }
    }

    pub fn unlimited() -> Self {
        Self { requests_per_cycle: 0, max_pending: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_one_per_cycle_unbounded() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.requests_per_cycle, 1);
        assert!(cfg.max_pending.is_none());
    }
}
