use crate::model::Observation;

/// Supplies market observations for a token identifier.
/// Any failure (network, bad response, no matching pairs) is reported as `None`.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, token: &str) -> Option<Vec<Observation>>;
}
