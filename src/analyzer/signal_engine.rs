use crate::model::{Observation, Signal, SignalRecord};

/// A lone observation below this USD price is classified as BUY, otherwise SELL.
/// Arbitrary demo value kept for compatibility; it is not a trend signal.
pub const SINGLE_POINT_BUY_THRESHOLD: f64 = 0.05;

/// Trait defining the interface for a signal analyzer.
pub trait Analyzer {
    fn classify(&self, observations: &[Observation]) -> Vec<SignalRecord>;

    fn select_actionable(&self, records: &[SignalRecord]) -> Vec<SignalRecord>;

    /// Classifies and keeps the actionable records. `None` covers both an empty
    /// input and a result with nothing but HOLD.
    fn run_analysis(&self, observations: &[Observation]) -> Option<Vec<SignalRecord>> {
        if observations.is_empty() {
            return None;
        }
        let actionable = self.select_actionable(&self.classify(observations));
        if actionable.is_empty() {
            None
        } else {
            Some(actionable)
        }
    }
}

/// Stateless price-movement classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine;

impl SignalEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for SignalEngine {
    /// Emits exactly one record per observation, in input order.
    fn classify(&self, observations: &[Observation]) -> Vec<SignalRecord> {
        match observations {
            [] => Vec::new(),
            [only] => {
                let signal = if only.price < SINGLE_POINT_BUY_THRESHOLD {
                    Signal::Buy
                } else {
                    Signal::Sell
                };
                vec![SignalRecord::from_observation(only, signal)]
            }
            [first, ..] => {
                let mut records = Vec::with_capacity(observations.len());
                // no predecessor to compare against
                records.push(SignalRecord::from_observation(first, Signal::Hold));
                for window in observations.windows(2) {
                    let signal = trend_signal(window[0].price, window[1].price);
                    records.push(SignalRecord::from_observation(&window[1], signal));
                }
                records
            }
        }
    }

    fn select_actionable(&self, records: &[SignalRecord]) -> Vec<SignalRecord> {
        records
            .iter()
            .filter(|r| r.signal.is_actionable())
            .copied()
            .collect()
    }
}

fn trend_signal(previous: f64, current: f64) -> Signal {
    if current < previous {
        Signal::Buy
    } else if current > previous {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<Observation> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Observation {
                timestamp: 1_700_000_000 + i as i64 * 3600,
                price,
                volume: 1_000.0,
                liquidity: 50_000.0,
            })
            .collect()
    }

    fn signals(records: &[SignalRecord]) -> Vec<Signal> {
        records.iter().map(|r| r.signal).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        let engine = SignalEngine::new();
        assert!(engine.classify(&[]).is_empty());
        assert_eq!(engine.run_analysis(&[]), None);
    }

    #[test]
    fn single_point_uses_absolute_threshold() {
        let engine = SignalEngine::new();
        assert_eq!(signals(&engine.classify(&series(&[0.03]))), vec![Signal::Buy]);
        assert_eq!(signals(&engine.classify(&series(&[0.10]))), vec![Signal::Sell]);
        // the threshold itself is not below the threshold
        assert_eq!(signals(&engine.classify(&series(&[0.05]))), vec![Signal::Sell]);
    }

    #[test]
    fn single_point_is_always_actionable() {
        let engine = SignalEngine::new();
        let result = engine.run_analysis(&series(&[0.03])).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].signal, Signal::Buy);
        assert_eq!(result[0].price, 0.03);
        assert_eq!(result[0].timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn falling_price_is_buy() {
        let engine = SignalEngine::new();
        let records = engine.classify(&series(&[0.10, 0.08]));
        assert_eq!(signals(&records), vec![Signal::Hold, Signal::Buy]);
    }

    #[test]
    fn rising_price_is_sell() {
        let engine = SignalEngine::new();
        let records = engine.classify(&series(&[0.08, 0.10]));
        assert_eq!(signals(&records), vec![Signal::Hold, Signal::Sell]);
    }

    #[test]
    fn flat_price_is_not_actionable() {
        let engine = SignalEngine::new();
        let input = series(&[0.10, 0.10]);
        assert_eq!(signals(&engine.classify(&input)), vec![Signal::Hold, Signal::Hold]);
        assert_eq!(engine.run_analysis(&input), None);
    }

    #[test]
    fn run_analysis_keeps_only_actionable_rows() {
        let engine = SignalEngine::new();
        let input = series(&[0.10, 0.08, 0.08]);
        assert_eq!(
            signals(&engine.classify(&input)),
            vec![Signal::Hold, Signal::Buy, Signal::Hold]
        );

        let result = engine.run_analysis(&input).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].signal, Signal::Buy);
        assert_eq!(result[0].price, 0.08);
        assert_eq!(result[0].timestamp.timestamp(), 1_700_003_600);
    }

    #[test]
    fn select_actionable_preserves_order() {
        let engine = SignalEngine::new();
        let records = engine.classify(&series(&[0.5, 0.4, 0.4, 0.6, 0.2]));
        let actionable = engine.select_actionable(&records);
        assert_eq!(signals(&actionable), vec![Signal::Buy, Signal::Sell, Signal::Buy]);
        assert_eq!(
            actionable.iter().map(|r| r.price).collect::<Vec<_>>(),
            vec![0.4, 0.6, 0.2]
        );
    }

    #[test]
    fn output_length_matches_input_length() {
        let engine = SignalEngine::new();
        for n in 1..8 {
            let prices: Vec<f64> = (0..n).map(|i| ((i * 7) % 3) as f64 * 0.01).collect();
            assert_eq!(engine.classify(&series(&prices)).len(), n);
        }
    }

    #[test]
    fn classify_is_idempotent() {
        let engine = SignalEngine::new();
        let input = series(&[0.2, 0.3, 0.1, 0.1, 0.4]);
        assert_eq!(engine.classify(&input), engine.classify(&input));
    }
}
