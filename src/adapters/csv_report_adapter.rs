//! CSV report adapter.
//!
//! One row per ranked pick; the file name embeds the run date and the
//! output directory is created on demand.

use crate::domain::error::SelectorError;
use crate::domain::quote::Recommendation;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvReportAdapter {
    output_dir: PathBuf,
}

impl CsvReportAdapter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn report_path(&self, run_date: NaiveDate) -> PathBuf {
        self.output_dir
            .join(format!("limit_up_picks_{}.csv", run_date.format("%Y%m%d")))
    }
}

impl ReportPort for CsvReportAdapter {
    fn write(
        &self,
        picks: &[Recommendation],
        run_date: NaiveDate,
    ) -> Result<PathBuf, SelectorError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| SelectorError::ReportWrite {
            path: self.output_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = self.report_path(run_date);
        let to_write_error = |e: csv::Error| SelectorError::ReportWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let mut writer = csv::Writer::from_path(&path).map_err(to_write_error)?;
        writer
            .write_record([
                "code",
                "name",
                "price",
                "change_pct",
                "turnover_amount_100m",
                "turnover_rate_pct",
                "volume_ratio",
                "float_cap_100m",
                "pe_ratio",
                "limit_up_streak",
                "score",
                "rationale",
            ])
            .map_err(to_write_error)?;

        for pick in picks {
            let quote = &pick.quote;
            let row = [
                quote.symbol.clone(),
                quote.name.clone(),
                format!("{:.2}", quote.price),
                format!("{:.2}", quote.change_percent),
                format!("{:.2}", quote.turnover_amount_hundred_millions()),
                format!("{:.2}", quote.turnover_rate),
                format!("{:.2}", quote.volume_ratio),
                format!("{:.2}", quote.float_cap_hundred_millions()),
                quote
                    .pe_ratio
                    .map(|pe| format!("{pe:.2}"))
                    .unwrap_or_default(),
                pick.streak_days.to_string(),
                format!("{:.2}", pick.score),
                pick.rationale.clone(),
            ];
            writer.write_record(&row).map_err(to_write_error)?;
        }

        writer.flush().map_err(|e| SelectorError::ReportWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(path)
    }
}
