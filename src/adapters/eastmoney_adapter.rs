//! Eastmoney quote snapshot adapter.
//!
//! Pulls the full exchange universe in one `clist` page, sorted by percent
//! change. The response keys fields by short numeric codes: f2 price,
//! f3 change percent, f6 turnover amount, f8 turnover rate, f9 PE,
//! f10 volume ratio, f12 symbol, f14 name, f20 float market cap.

use crate::domain::error::SelectorError;
use crate::domain::quote::{RawQuote, RawValue};
use crate::ports::quote_port::QuotePort;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::info;

const SNAPSHOT_URL: &str = "http://82.push2.eastmoney.com/api/qt/clist/get";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER: &str = "http://quote.eastmoney.com/";

/// Market segment expression selecting Shanghai/Shenzhen A shares.
const MARKET_SEGMENTS: &str = "m:0 t:6,m:0 t:80,m:1 t:2,m:1 t:23,m:0 t:81 s:2048";
const FIELDS: &str = "f2,f3,f6,f8,f9,f10,f12,f14,f20";

pub struct EastmoneyAdapter {
    client: Client,
    url: String,
}

impl EastmoneyAdapter {
    pub fn new() -> Result<Self, SelectorError> {
        Self::with_url(SNAPSHOT_URL)
    }

    /// Point the adapter at a different endpoint (tests).
    pub fn with_url(url: &str) -> Result<Self, SelectorError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SelectorError::Fetch {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    fn parse_snapshot(body: &str) -> Result<Vec<RawQuote>, SelectorError> {
        let json: Value =
            serde_json::from_str(body).map_err(|e| SelectorError::Fetch {
                reason: format!("malformed response: {e}"),
            })?;

        let data = json.get("data").filter(|d| !d.is_null());
        let Some(data) = data else {
            return Err(SelectorError::EmptyPayload);
        };

        let diff = data
            .get("diff")
            .and_then(|v| v.as_array())
            .ok_or(SelectorError::EmptyPayload)?;

        Ok(diff.iter().map(raw_quote_from_row).collect())
    }
}

impl QuotePort for EastmoneyAdapter {
    fn fetch_snapshot(&self) -> Result<Vec<RawQuote>, SelectorError> {
        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        info!("fetching market snapshot");

        let response = self
            .client
            .get(&self.url)
            .header("Referer", REFERER)
            .query(&[
                ("pn", "1"),
                ("pz", "5000"),
                ("po", "1"),
                ("np", "1"),
                ("ut", "bd1d9ddb04089700cf9c27f6f7426281"),
                ("fltt", "2"),
                ("invt", "2"),
                ("fid", "f3"),
                ("fs", MARKET_SEGMENTS),
                ("fields", FIELDS),
                ("_", timestamp.as_str()),
            ])
            .send()
            .map_err(|e| SelectorError::Fetch {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SelectorError::Fetch {
                reason: format!("bad status: {status}"),
            });
        }

        let body = response.text().map_err(|e| SelectorError::Fetch {
            reason: e.to_string(),
        })?;
        Self::parse_snapshot(&body)
    }
}

fn raw_quote_from_row(row: &Value) -> RawQuote {
    RawQuote {
        symbol: string_field(row, "f12"),
        name: string_field(row, "f14"),
        price: raw_field(row, "f2"),
        change_percent: raw_field(row, "f3"),
        turnover_amount: raw_field(row, "f6"),
        turnover_rate: raw_field(row, "f8"),
        volume_ratio: raw_field(row, "f10"),
        float_market_cap: raw_field(row, "f20"),
        pe_ratio: raw_field(row, "f9"),
    }
}

fn string_field(row: &Value, code: &str) -> String {
    match row.get(code) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// The feed delivers numerics as numbers, strings, or "-" placeholders
/// depending on the session; keep the raw shape for the normalizer.
fn raw_field(row: &Value, code: &str) -> Option<RawValue> {
    match row.get(code) {
        Some(Value::Number(n)) => n.as_f64().map(RawValue::Number),
        Some(Value::String(s)) => Some(RawValue::Text(s.clone())),
        _ => None,
    }
}
