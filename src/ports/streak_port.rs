//! Consecutive limit-up streak lookup port trait.

/// Pluggable lookup for how many sessions in a row a symbol has closed
/// limit-up, counting today (so the minimum is 1).
pub trait StreakPort {
    fn consecutive_limit_up_days(&self, symbol: &str) -> u32;
}
