//! Run-level error types.
//!
//! Per-record normalization failures live in [`crate::domain::normalize`]
//! and are recovered in place; only the errors here can end a run.

/// Top-level error type for zt-selector.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("quote fetch failed: {reason}")]
    Fetch { reason: String },

    #[error("quote feed returned an empty data payload")]
    EmptyPayload,

    #[error("failed to write report {path}: {reason}")]
    ReportWrite { path: String, reason: String },
}

impl From<&SelectorError> for std::process::ExitCode {
    fn from(err: &SelectorError) -> Self {
        let code: u8 = match err {
            SelectorError::ReportWrite { .. } => 1,
            SelectorError::Fetch { .. } | SelectorError::EmptyPayload => 3,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    fn assert_code(err: SelectorError, expected: u8) {
        let code = ExitCode::from(&err);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(expected)));
    }

    #[test]
    fn every_variant_maps_to_its_exit_code() {
        assert_code(
            SelectorError::ReportWrite {
                path: "output/report.csv".into(),
                reason: "permission denied".into(),
            },
            1,
        );
        assert_code(
            SelectorError::Fetch {
                reason: "connection refused".into(),
            },
            3,
        );
        assert_code(SelectorError::EmptyPayload, 3);
    }
}
