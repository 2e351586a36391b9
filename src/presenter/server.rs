use crate::analyzer::{analyze_token, SignalEngine};
use crate::presenter::html::{render_page, ChartSettings};
use crate::source::DataSource;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub analyzer: SignalEngine,
    pub chart: Arc<ChartSettings>,
}

impl AppState {
    pub fn new(source: Arc<dyn DataSource>, chart: ChartSettings) -> Self {
        Self {
            source,
            analyzer: SignalEngine::new(),
            chart: Arc::new(chart),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(liveness_handler))
        .route("/:token", get(display_chart))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn liveness_handler() -> &'static str {
    "ok"
}

async fn display_chart(State(state): State<AppState>, Path(token): Path<String>) -> Html<String> {
    let token = token.trim();
    let signals = analyze_token(state.source.as_ref(), &state.analyzer, token).await;
    let chart_url = state.chart.chart_url(token);
    Html(render_page(token, &chart_url, signals.as_deref()))
}
