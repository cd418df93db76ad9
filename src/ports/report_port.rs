//! Report output port trait.

use crate::domain::error::SelectorError;
use crate::domain::quote::Recommendation;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Sink for the ranked picks; returns the path of the written file.
pub trait ReportPort {
    fn write(
        &self,
        picks: &[Recommendation],
        run_date: NaiveDate,
    ) -> Result<PathBuf, SelectorError>;
}
