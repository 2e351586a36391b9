// DexScreener-specific JSON parsing
use crate::model::{Observation, ParserError};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub trait Parser {
    fn parse(&self, body: &str, fetched_at: DateTime<Utc>) -> Result<Vec<Observation>, ParserError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pairs: Option<Vec<RawPair>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPair {
    price_usd: Option<RawNumber>,
    volume: Option<RawVolume>,
    #[serde(rename = "volume24h")]
    legacy_volume_24h: Option<RawNumber>,
    liquidity: Option<RawLiquidity>,
}

#[derive(Debug, Deserialize)]
struct RawVolume {
    h24: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
struct RawLiquidity {
    usd: Option<RawNumber>,
}

/// The API sends prices as decimal strings and volumes as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn to_f64(field: &'static str, raw: Option<&RawNumber>) -> Result<f64, ParserError> {
    match raw {
        None => Ok(0.0),
        Some(RawNumber::Number(n)) => Ok(*n),
        Some(RawNumber::Text(s)) => s.trim().parse::<f64>().map_err(|_| ParserError::InvalidNumber {
            field,
            value: s.clone(),
        }),
    }
}

pub struct DexScreenerParser;

impl DexScreenerParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for DexScreenerParser {
    /// Builds a single snapshot observation from the first matching pair.
    /// Returns an empty list when the search matched no pairs.
    fn parse(&self, body: &str, fetched_at: DateTime<Utc>) -> Result<Vec<Observation>, ParserError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| ParserError::MalformedJson(e.to_string()))?;

        let Some(pair) = response.pairs.as_deref().and_then(|pairs| pairs.first()) else {
            return Ok(Vec::new());
        };

        let volume_raw = pair
            .volume
            .as_ref()
            .and_then(|v| v.h24.as_ref())
            .or(pair.legacy_volume_24h.as_ref());

        let observation = Observation {
            timestamp: fetched_at.timestamp(),
            price: to_f64("priceUsd", pair.price_usd.as_ref())?,
            volume: to_f64("volume.h24", volume_raw)?,
            liquidity: to_f64("liquidity.usd", pair.liquidity.as_ref().and_then(|l| l.usd.as_ref()))?,
        };

        Ok(vec![observation])
    }
}
