use crate::config::AppConfig;
use crate::model::{FetchError, Observation};
use crate::normalizer::normalize_all;
use crate::parser::{DexScreenerParser, Parser};
use crate::source::traits::DataSource;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

pub struct DexScreenerSource {
    client: Client,
    api_base_url: String,
    request_timeout: Duration,
    parser: DexScreenerParser,
}

impl DexScreenerSource {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let request_timeout = Duration::from_secs(config.request_timeout_seconds);
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(request_timeout)
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            request_timeout,
            parser: DexScreenerParser::new(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/latest/dex/search/", self.api_base_url)
    }

    /// Performs the search request and turns the first pair into a validated observation.
    pub async fn try_fetch(&self, token: &str) -> Result<Vec<Observation>, FetchError> {
        let url = self.build_url();

        let response = match timeout(
            self.request_timeout,
            self.client.get(&url).query(&[("q", token)]).send(),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) if e.is_timeout() => return Err(FetchError::Timeout),
            Ok(Err(e)) => return Err(FetchError::HttpError(e.to_string())),
            Err(_) => return Err(FetchError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidResponse(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        let observations = self.parser.parse(&body, Utc::now())?;
        Ok(normalize_all(observations))
    }
}

#[async_trait::async_trait]
impl DataSource for DexScreenerSource {
    async fn fetch(&self, token: &str) -> Option<Vec<Observation>> {
        let token = token.trim();
        if token.is_empty() {
            warn!("⚠️ Empty token identifier, nothing to fetch.");
            return None;
        }

        info!("📡 Fetching market data for {}...", token);
        match self.try_fetch(token).await {
            Ok(observations) if observations.is_empty() => {
                warn!("⚠️ No pairs found for token {}.", token);
                None
            }
            Ok(observations) => {
                info!("✅ Data fetched: {:?}", observations);
                Some(observations)
            }
            Err(FetchError::Parse(e)) => {
                warn!("❌ Unexpected API response for {}: {}", token, e);
                None
            }
            Err(e) => {
                warn!("❌ API connection error for {}: {}", token, e);
                None
            }
        }
    }
}
