//! Quote snapshot port trait.

use crate::domain::error::SelectorError;
use crate::domain::quote::RawQuote;

/// Source of the day's full market snapshot, one record per security.
pub trait QuotePort {
    fn fetch_snapshot(&self) -> Result<Vec<RawQuote>, SelectorError>;
}
