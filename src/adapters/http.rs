use crate::core::detail::{self, DetailOutcome};
use crate::core::filter;
use crate::core::forms::{self, FormKind};
use crate::core::render::{self, Site};
use crate::core::{LocationId, LocationSource, SiteSettings};
use crate::domain::catalog::Catalog;
use crate::utils::error::{ListingError, Result};
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const LISTING_PATH: &str = "/";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub site: Arc<Site>,
}

impl AppState {
    pub fn new(catalog: Catalog, site: Site) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site: Arc::new(site),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route(LISTING_PATH, get(listing))
        .route("/location", get(location_detail))
        .route("/api/locations", get(api_locations))
        .route("/api/locations/{id}", get(api_location))
        .route("/health", get(|| async { "ok" }));

    for kind in FormKind::ALL {
        app = app.route(
            kind.path(),
            get(move |State(state): State<AppState>| async move {
                Html(render::render_form_page(&state.site, kind, None))
            })
            .post(move |State(state): State<AppState>, body: Bytes| async move {
                submit_form(&state, kind, &body)
            }),
        );
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn listing(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let q = filter::search_query(query.as_deref());
    let hits = filter::filter(state.catalog.records(), &q);
    Html(render::render_listing_page(&state.site, &q, &hits))
}

async fn location_detail(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let id = detail::parse_location_id(query.as_deref());
    let outcome = detail::resolve(state.catalog.as_ref(), id, LISTING_PATH);

    match outcome {
        DetailOutcome::Found(record) => {
            Html(render::render_detail_page(&state.site, record)).into_response()
        }
        DetailOutcome::Redirect { to } => Redirect::to(&to).into_response(),
    }
}

fn submit_form(state: &AppState, kind: FormKind, body: &[u8]) -> Html<String> {
    let submitted = url::form_urlencoded::parse(body).count();
    let ack = forms::acknowledge(kind, submitted);
    Html(render::render_form_page(&state.site, kind, Some(&ack)))
}

async fn api_locations(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let q = filter::search_query(query.as_deref());
    let hits = filter::filter(state.catalog.records(), &q);
    Json(hits).into_response()
}

async fn api_location(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let found = raw
        .parse::<u32>()
        .ok()
        .and_then(LocationId::new)
        .and_then(|id| state.catalog.get(id));

    match found {
        Some(record) => Json(record).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("no location with id {}", raw) })),
        )
            .into_response(),
    }
}

/// Serves on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn run_server<S: SiteSettings + ?Sized>(settings: &S, catalog: Catalog) -> Result<()> {
    let address = settings.bind_address().to_string();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ListingError::BindError {
            address: address.clone(),
            source,
        })?;

    let local = listener.local_addr()?;
    tracing::info!("🚀 Serving {} locations on http://{}", catalog.len(), local);

    serve(listener, AppState::new(catalog, Site::from_settings(settings))).await?;
    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // never resolve, keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
