//! Heuristic desirability scoring for limit-up candidates.
//!
//! Pure annotation pass: input order is preserved and no filter-relevant
//! field is touched. The consecutive-limit-up streak comes from a pluggable
//! [`StreakPort`] lookup.

use crate::domain::quote::{QuoteRecord, Recommendation};
use crate::domain::settings::ScoreSettings;
use crate::ports::streak_port::StreakPort;

/// Separator between rationale clauses.
const RATIONALE_SEPARATOR: &str = ", ";

/// Rationale when no individual clause triggers.
const FALLBACK_RATIONALE: &str = "composite score";

/// Score every candidate, attaching a score and a human-readable rationale.
pub fn score_quotes(
    candidates: &[QuoteRecord],
    settings: &ScoreSettings,
    streaks: &dyn StreakPort,
) -> Vec<Recommendation> {
    candidates
        .iter()
        .map(|quote| {
            let streak_days = streaks.consecutive_limit_up_days(&quote.symbol);
            let score = compute_score(quote, streak_days, settings);
            let rationale = build_rationale(quote, streak_days);
            Recommendation {
                quote: quote.clone(),
                streak_days,
                score,
                rationale,
            }
        })
        .collect()
}

fn compute_score(quote: &QuoteRecord, streak_days: u32, settings: &ScoreSettings) -> f64 {
    let amount = quote.turnover_amount_hundred_millions();
    let cap = quote.float_cap_hundred_millions();

    settings.base_score
        + quote.volume_ratio * settings.volume_ratio_weight
        + quote.turnover_rate * settings.turnover_rate_weight
        + f64::from(streak_days) * settings.continuous_limit_up_weight
        + (amount * settings.amount_weight).min(settings.amount_max_score)
        + market_cap_bonus(cap)
}

/// Flat bonus for a float cap in the sweet spot: small enough to move,
/// large enough to trade.
fn market_cap_bonus(cap_hundred_millions: f64) -> f64 {
    if (10.0..=50.0).contains(&cap_hundred_millions) {
        10.0
    } else if cap_hundred_millions > 50.0 && cap_hundred_millions <= 100.0 {
        5.0
    } else {
        0.0
    }
}

/// Concatenate the triggered clauses in their fixed order.
fn build_rationale(quote: &QuoteRecord, streak_days: u32) -> String {
    let amount = quote.turnover_amount_hundred_millions();
    let cap = quote.float_cap_hundred_millions();

    let mut clauses = Vec::new();
    if quote.volume_ratio > 1.5 {
        clauses.push(format!("high volume ratio ({:.2})", quote.volume_ratio));
    }
    if quote.turnover_rate > 3.0 {
        clauses.push(format!("high turnover ({:.2}%)", quote.turnover_rate));
    }
    if streak_days > 1 {
        clauses.push(format!("{streak_days} consecutive limit-ups"));
    }
    if (10.0..=50.0).contains(&cap) {
        clauses.push(format!("moderate float cap ({cap:.2})"));
    }
    if amount > 5.0 {
        clauses.push(format!("active trading ({amount:.2})"));
    }

    if clauses.is_empty() {
        FALLBACK_RATIONALE.to_string()
    } else {
        clauses.join(RATIONALE_SEPARATOR)
    }
}
