#![allow(dead_code)]

use zt_selector::domain::error::SelectorError;
use zt_selector::domain::quote::{RawQuote, RawValue};
use zt_selector::ports::quote_port::QuotePort;
use zt_selector::ports::streak_port::StreakPort;
use std::collections::HashMap;

pub struct MockQuotePort {
    pub snapshot: Vec<RawQuote>,
    pub fail_with: Option<String>,
}

impl MockQuotePort {
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            fail_with: None,
        }
    }

    pub fn with_snapshot(mut self, snapshot: Vec<RawQuote>) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            snapshot: Vec::new(),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl QuotePort for MockQuotePort {
    fn fetch_snapshot(&self) -> Result<Vec<RawQuote>, SelectorError> {
        match &self.fail_with {
            Some(reason) => Err(SelectorError::Fetch {
                reason: reason.clone(),
            }),
            None => Ok(self.snapshot.clone()),
        }
    }
}

/// Streak lookup with per-symbol overrides; anything unknown reports 1.
pub struct MockStreakPort {
    pub streaks: HashMap<String, u32>,
}

impl MockStreakPort {
    pub fn new() -> Self {
        Self {
            streaks: HashMap::new(),
        }
    }

    pub fn with_streak(mut self, symbol: &str, days: u32) -> Self {
        self.streaks.insert(symbol.to_string(), days);
        self
    }
}

impl StreakPort for MockStreakPort {
    fn consecutive_limit_up_days(&self, symbol: &str) -> u32 {
        self.streaks.get(symbol).copied().unwrap_or(1)
    }
}

pub fn make_quote(symbol: &str, name: &str, price: f64, change_percent: f64) -> RawQuote {
    RawQuote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: Some(RawValue::Number(price)),
        change_percent: Some(RawValue::Number(change_percent)),
        turnover_amount: Some(RawValue::Number(600_000_000.0)),
        turnover_rate: Some(RawValue::Number(4.0)),
        volume_ratio: Some(RawValue::Number(2.0)),
        float_market_cap: Some(RawValue::Number(3_000_000_000.0)),
        pe_ratio: Some(RawValue::Number(20.0)),
    }
}

/// A limit-up quote delivered entirely as formatted strings, the way the
/// feed sometimes does.
pub fn make_stringly_quote(symbol: &str, name: &str) -> RawQuote {
    RawQuote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: Some(RawValue::Text("12.50".to_string())),
        change_percent: Some(RawValue::Text("10.01%".to_string())),
        turnover_amount: Some(RawValue::Text("600000000".to_string())),
        turnover_rate: Some(RawValue::Text("4.00%".to_string())),
        volume_ratio: Some(RawValue::Text("2.0".to_string())),
        float_market_cap: Some(RawValue::Text("3000000000".to_string())),
        pe_ratio: Some(RawValue::Text("-".to_string())),
    }
}
