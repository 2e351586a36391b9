// Core structs: Observation, Signal, SignalRecord
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::utils::epoch_to_datetime;

/// One market-data sample for a token, as supplied by a data source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Unix epoch seconds.
    pub timestamp: i64,
    pub price: f64,
    pub volume: f64,
    pub liquidity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// BUY and SELL are actionable, HOLD is not.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::Hold)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRecord {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub signal: Signal,
}

impl SignalRecord {
    pub fn from_observation(observation: &Observation, signal: Signal) -> Self {
        Self {
            timestamp: epoch_to_datetime(observation.timestamp),
            price: observation.price,
            signal,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    InvalidResponse(u16),
    #[error(transparent)]
    Parse(#[from] ParserError),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
