//! Access to the tracked-time record document.
//!
//! The document is a static JSON array bundled with the crate; it is parsed
//! once and served read-only. Each display slot fetches its own record by
//! position, so one bad fetch never takes the other slots down with it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::period::Period;

const RAW_DOCUMENT: &str = include_str!("../../assets/data/timeframes.json");

static DOCUMENT: Lazy<Result<Vec<TimeframeRecord>, SourceError>> =
    Lazy::new(|| parse_document(RAW_DOCUMENT));

/// One tracked category: a title plus per-period current/previous hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeRecord {
    pub title: String,
    pub timeframes: Timeframes,
}

/// Per-period figures. Each period is optional so a record missing one
/// aggregation still parses; the gap surfaces only when that period is
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeframes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<PeriodFigures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<PeriodFigures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<PeriodFigures>,
}

impl Timeframes {
    pub fn get(&self, period: Period) -> Option<&PeriodFigures> {
        match period {
            Period::Daily => self.daily.as_ref(),
            Period::Weekly => self.weekly.as_ref(),
            Period::Monthly => self.monthly.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodFigures {
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("tracked-time data unavailable: {0}")]
    DataUnavailable(String),
    #[error("record {title:?} has no {period} figures")]
    MissingPeriodData { title: String, period: Period },
}

pub fn parse_document(raw: &str) -> Result<Vec<TimeframeRecord>, SourceError> {
    serde_json::from_str(raw).map_err(|err| SourceError::DataUnavailable(err.to_string()))
}

/// The whole record document, in slot order.
pub async fn fetch_records() -> Result<Vec<TimeframeRecord>, SourceError> {
    DOCUMENT.clone()
}

/// The record backing one display slot. Out-of-range indexes fail the same
/// way a broken document does; callers do not retry.
pub async fn fetch_record(index: usize) -> Result<TimeframeRecord, SourceError> {
    let records = fetch_records().await?;
    records
        .get(index)
        .cloned()
        .ok_or_else(|| SourceError::DataUnavailable(format!("no record at slot {index}")))
}

pub async fn record_count() -> Result<usize, SourceError> {
    Ok(fetch_records().await?.len())
}
