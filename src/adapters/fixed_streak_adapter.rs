//! Constant streak adapter.
//!
//! True streak history would need a historical-data API; until one is wired
//! in, every symbol reports a streak of 1 (today's limit-up only). This stub
//! behavior is deliberate and load-bearing for the scoring defaults.

use crate::ports::streak_port::StreakPort;

pub struct FixedStreakAdapter;

impl StreakPort for FixedStreakAdapter {
    fn consecutive_limit_up_days(&self, _symbol: &str) -> u32 {
        1
    }
}
