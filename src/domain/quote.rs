//! Quote record representations for one snapshot session.

/// A raw field value as delivered by the quote feed: sometimes a number,
/// sometimes a formatted string ("1,234", "10.01%").
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

/// One unprocessed snapshot row. Numeric fields stay in their raw,
/// heterogeneously-formatted shape until the filter pipeline normalizes them;
/// an absent upstream field is `None`.
#[derive(Debug, Clone)]
pub struct RawQuote {
    pub symbol: String,
    pub name: String,
    pub price: Option<RawValue>,
    pub change_percent: Option<RawValue>,
    pub turnover_amount: Option<RawValue>,
    pub turnover_rate: Option<RawValue>,
    pub volume_ratio: Option<RawValue>,
    pub float_market_cap: Option<RawValue>,
    pub pe_ratio: Option<RawValue>,
}

/// A fully normalized record: every numeric field is a finite decimal in
/// canonical units (prices in currency units, percentages as plain numbers,
/// amounts in base currency units). Immutable once built; scoring attaches
/// its results via [`Recommendation`] rather than mutating this.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub turnover_amount: f64,
    pub turnover_rate: f64,
    pub volume_ratio: f64,
    pub float_market_cap: f64,
    /// Undefined for loss-making listings (feed sends "-").
    pub pe_ratio: Option<f64>,
}

/// Scoring output: the base record plus the annotations attached by the
/// scoring engine.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub quote: QuoteRecord,
    pub streak_days: u32,
    pub score: f64,
    pub rationale: String,
}

/// One hundred million, the human reporting unit for turnover amounts and
/// float market caps ("亿").
pub const HUNDRED_MILLION: f64 = 100_000_000.0;

impl QuoteRecord {
    pub fn turnover_amount_hundred_millions(&self) -> f64 {
        self.turnover_amount / HUNDRED_MILLION
    }

    pub fn float_cap_hundred_millions(&self) -> f64 {
        self.float_market_cap / HUNDRED_MILLION
    }
}
