use crate::analyzer::Analyzer;
use crate::model::SignalRecord;
use crate::source::DataSource;
use crate::utils::format_timestamp;
use tracing::{info, warn};

/// Fetches observations for a token and returns its actionable signals.
/// Missing data and an all-HOLD result both come back as `None`; only the logs tell them apart.
pub async fn analyze_token<A>(
    source: &dyn DataSource,
    analyzer: &A,
    token: &str,
) -> Option<Vec<SignalRecord>>
where
    A: Analyzer + ?Sized,
{
    info!("🚀 Starting analysis for {}...", token);

    let observations = match source.fetch(token).await {
        Some(obs) if !obs.is_empty() => obs,
        _ => {
            warn!("⚠️ No valid data for {}, analysis skipped.", token);
            return None;
        }
    };

    match analyzer.run_analysis(&observations) {
        Some(signals) => {
            info!("✅ {} signal(s) found for {}:", signals.len(), token);
            for record in &signals {
                info!(
                    "{} | {} | {}",
                    format_timestamp(&record.timestamp),
                    record.price,
                    record.signal
                );
            }
            Some(signals)
        }
        None => {
            info!(
                "ℹ️ No actionable signal for {} ({} observation(s)).",
                token,
                observations.len()
            );
            None
        }
    }
}
