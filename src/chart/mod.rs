//! Chart Data
//!
//! Payload types for the technical-analysis endpoint and extraction of
//! per-indicator series for the canvas renderer.
//!
//! The endpoint returns one dataframe per running bot; each row carries an
//! `open_time` plus whatever indicator columns that bot computes. The panel
//! charts one indicator of the first bot frame at a time.

pub mod canvas;

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// Response of the technical-analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorPayload {
    pub all_bots_df: Vec<BotFrame>,
}

/// One bot's dataframe.
#[derive(Debug, Clone, Deserialize)]
pub struct BotFrame {
    pub data: Vec<IndicatorRow>,
}

/// A single row: the open time plus the bot's indicator columns.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorRow {
    pub open_time: Value,
    #[serde(flatten)]
    pub indicators: serde_json::Map<String, Value>,
}

/// Ordered `(timestamp_ms, value)` pairs for one indicator.
pub type IndicatorSeries = Vec<(i64, f64)>;

/// Selector entries: every indicator column present in the first bot frame,
/// sorted for a stable order.
pub fn indicator_names(payload: &IndicatorPayload) -> Vec<String> {
    let mut names = BTreeSet::new();
    if let Some(frame) = payload.all_bots_df.first() {
        for row in &frame.data {
            names.extend(row.indicators.keys().cloned());
        }
    }
    names.into_iter().collect()
}

/// Extract the series for one indicator from the first bot frame. Rows with
/// an unreadable open time or a non-numeric value are skipped.
pub fn extract(payload: &IndicatorPayload, indicator: &str) -> IndicatorSeries {
    let Some(frame) = payload.all_bots_df.first() else {
        return Vec::new();
    };

    frame
        .data
        .iter()
        .filter_map(|row| {
            let timestamp = parse_open_time(&row.open_time)?;
            let value = row.indicators.get(indicator)?.as_f64()?;
            Some((timestamp, value))
        })
        .collect()
}

/// Open times arrive either as epoch milliseconds or as ISO-8601 text.
fn parse_open_time(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.timestamp_millis())
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc().timestamp_millis())
                    .ok()
            }),
        _ => None,
    }
}
