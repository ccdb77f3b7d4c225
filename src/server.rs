use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{OriginalUri, Path as UrlPath, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::app::{DetailUseCase, ListUseCase, PokeApiPort};
use crate::config::PokeApiConfig;
use crate::constants;
use crate::error::{PokedexError, Result};
use crate::metrics::ViewMetrics;
use crate::views::{DetailTemplate, ListTemplate};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub list: Arc<ListUseCase>,
    pub detail: Arc<DetailUseCase>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(api: Arc<dyn PokeApiPort>, config: &PokeApiConfig) -> Self {
        Self {
            list: Arc::new(ListUseCase::new(
                api.clone(),
                config.list_limit,
                config.list_offset,
            )),
            detail: Arc::new(DetailUseCase::new(api)),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        error!(error = %self, kind = self.kind(), "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

fn render<T: Template>(template: &T) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": constants::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus text exposition, 404 when metrics are disabled
async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn pokemon_list(State(state): State<AppState>) -> Result<Html<String>> {
    let page = state.list.build().await;
    ViewMetrics::record("list", page.pokemons.is_empty());
    render(&ListTemplate { page: &page })
}

async fn pokemon_detail(
    State(state): State<AppState>,
    UrlPath(id_or_name): UrlPath<String>,
) -> Result<Html<String>> {
    let page = state.detail.build(&id_or_name).await;
    ViewMetrics::record("detail", page.is_error());
    render(&DetailTemplate { page: &page })
}

/// `/pikachu` -> `/pikachu/`
async fn append_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    Redirect::permanent(&format!("{}/", uri.path()))
}

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pokemon_list))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/:id_or_name/", get(pokemon_detail))
        .route("/:id_or_name", get(append_slash))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Serve until Ctrl-C
pub async fn start_server<A: ToSocketAddrs>(router: Router, addr: A) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("HTTP server running on http://{}", local);
    info!("Health check: http://{}/health", local);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
