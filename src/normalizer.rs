use crate::model::Observation;
use tracing::warn;

/// Validates observations before they reach the analyzer.
/// Bad volume or liquidity is coerced to zero; a bad price or timestamp drops the observation.
pub fn normalize_all(observations: Vec<Observation>) -> Vec<Observation> {
    observations
        .into_iter()
        .filter_map(normalize_observation)
        .collect()
}

fn normalize_observation(mut obs: Observation) -> Option<Observation> {
    if !obs.price.is_finite() || obs.price < 0.0 {
        warn!("⚠️ Dropping observation with invalid price: {}", obs.price);
        return None;
    }
    if obs.timestamp < 0 {
        warn!("⚠️ Dropping observation with negative timestamp: {}", obs.timestamp);
        return None;
    }

    obs.volume = non_negative(obs.volume);
    obs.liquidity = non_negative(obs.liquidity);
    Some(obs)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 { value } else { 0.0 }
}
