//! The five-stage exclusion pipeline that selects limit-up candidates.
//!
//! Stages run in a fixed order, each consuming the previous stage's
//! survivors. A record with an unparsable field is skipped (and reported in
//! [`FilterOutcome::skipped`]) rather than aborting the stage; an empty
//! survivor set is a normal outcome, not an error.

use crate::domain::normalize::{normalize, FieldKind, NormalizeError};
use crate::domain::quote::{QuoteRecord, RawQuote};
use crate::domain::settings::FilterSettings;
use tracing::{debug, info};

/// Marker substring for special-treatment (financially distressed) listings.
const ST_MARKER: &str = "ST";

/// Symbol prefix of sci-tech innovation board listings.
const SCI_TECH_PREFIX: &str = "688";

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Fully normalized survivors, in feed order.
    pub candidates: Vec<QuoteRecord>,
    /// Records dropped for field errors, with the reason each was dropped.
    pub skipped: Vec<SkippedQuote>,
    pub counts: StageCounts,
}

#[derive(Debug, Clone)]
pub struct SkippedQuote {
    pub symbol: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    EmptySymbol,
    BadField(NormalizeError),
}

/// Survivor count after each stage, for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub input: usize,
    pub prefix_admitted: usize,
    pub non_st: usize,
    pub non_sci_tech: usize,
    pub under_price_ceiling: usize,
    pub limit_up: usize,
}

/// Apply the five exclusion stages to a raw snapshot.
pub fn filter_quotes(raw: &[RawQuote], settings: &FilterSettings) -> FilterOutcome {
    let mut skipped = Vec::new();
    let mut counts = StageCounts {
        input: raw.len(),
        ..StageCounts::default()
    };

    // Stage 1: prefix admission (main-board listings by default)
    let mut survivors: Vec<&RawQuote> = Vec::new();
    for quote in raw {
        if quote.symbol.is_empty() {
            skipped.push(SkippedQuote {
                symbol: String::new(),
                reason: SkipReason::EmptySymbol,
            });
            continue;
        }
        if settings
            .stock_prefix
            .iter()
            .any(|prefix| quote.symbol.starts_with(prefix.as_str()))
        {
            survivors.push(quote);
        }
    }
    counts.prefix_admitted = survivors.len();

    // Stage 2: special-treatment exclusion
    if settings.exclude_st {
        survivors.retain(|quote| !quote.name.contains(ST_MARKER));
    }
    counts.non_st = survivors.len();

    // Stage 3: sci-tech board exclusion
    if settings.exclude_sci_tech_board {
        survivors.retain(|quote| !quote.symbol.starts_with(SCI_TECH_PREFIX));
    }
    counts.non_sci_tech = survivors.len();

    // Stage 4: price ceiling
    let mut priced: Vec<&RawQuote> = Vec::new();
    for quote in survivors {
        match normalize(FieldKind::Price, quote.price.as_ref()) {
            Ok(price) if price <= settings.max_price => priced.push(quote),
            Ok(_) => {}
            Err(e) => skip(&mut skipped, quote, e),
        }
    }
    counts.under_price_ceiling = priced.len();

    // Stage 5: limit-up admission, then full normalization of the survivors
    let mut candidates = Vec::new();
    for quote in priced {
        match normalize(FieldKind::Percent, quote.change_percent.as_ref()) {
            Ok(pct) if pct >= settings.min_limit_up_percent => {
                match normalize_record(quote) {
                    Ok(record) => candidates.push(record),
                    Err(e) => skip(&mut skipped, quote, e),
                }
            }
            Ok(_) => {}
            Err(e) => skip(&mut skipped, quote, e),
        }
    }
    counts.limit_up = candidates.len();

    info!(
        "filter stages: input {} -> prefix {} -> non-ST {} -> non-688 {} -> price<= {} -> limit-up {}",
        counts.input,
        counts.prefix_admitted,
        counts.non_st,
        counts.non_sci_tech,
        counts.under_price_ceiling,
        counts.limit_up,
    );

    FilterOutcome {
        candidates,
        skipped,
        counts,
    }
}

fn skip(skipped: &mut Vec<SkippedQuote>, quote: &RawQuote, error: NormalizeError) {
    debug!("skipping {}: {}", quote.symbol, error);
    skipped.push(SkippedQuote {
        symbol: quote.symbol.clone(),
        reason: SkipReason::BadField(error),
    });
}

/// Normalize every numeric field of a stage-5 survivor into a [`QuoteRecord`].
/// An unparsable PE ratio is treated as undefined rather than an error.
fn normalize_record(quote: &RawQuote) -> Result<QuoteRecord, NormalizeError> {
    Ok(QuoteRecord {
        symbol: quote.symbol.clone(),
        name: quote.name.clone(),
        price: normalize(FieldKind::Price, quote.price.as_ref())?,
        change_percent: normalize(FieldKind::Percent, quote.change_percent.as_ref())?,
        turnover_amount: normalize(FieldKind::Amount, quote.turnover_amount.as_ref())?,
        turnover_rate: normalize(FieldKind::Percent, quote.turnover_rate.as_ref())?,
        volume_ratio: normalize(FieldKind::Amount, quote.volume_ratio.as_ref())?,
        float_market_cap: normalize(FieldKind::Amount, quote.float_market_cap.as_ref())?,
        pe_ratio: normalize(FieldKind::Amount, quote.pe_ratio.as_ref()).ok(),
    })
}
