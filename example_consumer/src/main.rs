//! Example consumer: a small in-memory item service answering through api-responser.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Optional env: `RESPONDER_CONFIG` (path to a JSON config), `BIND_ADDR`.

use api_responser::{ApiResponse, ErrorContext, Responder, ResponderConfig, ResponseError};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tokio::net::TcpListener;
use validator::Validate;

#[derive(Clone, Serialize)]
struct Item {
    id: u64,
    name: String,
}

#[derive(Deserialize, Validate)]
struct NewItem {
    #[validate(length(min = 1, message = "can't be blank"))]
    name: String,
}

#[derive(Deserialize)]
struct Page {
    limit: Option<usize>,
}

#[derive(Clone)]
struct AppState {
    responder: Responder,
    items: Arc<RwLock<Vec<Item>>>,
}

impl AppState {
    /// Responder bound to the request's `Accept-Language`, if any.
    fn responder_for(&self, headers: &HeaderMap) -> Responder {
        headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split([',', ';']).next())
            .map(|tag| self.responder.with_locale(tag.trim()))
            .unwrap_or_else(|| self.responder.clone())
    }
}

async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<Page>,
) -> Result<ApiResponse, ResponseError> {
    let responder = state.responder_for(&headers);
    let Ok(items) = state.items.read() else {
        return responder.internal_server_error(ErrorContext::debug("item store poisoned").reported());
    };
    let total = items.len() as u64;
    let shown: Vec<Item> = items.iter().take(page.limit.unwrap_or(usize::MAX)).cloned().collect();
    responder.record_index(&shown, Some(total))
}

async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<ApiResponse, ResponseError> {
    let responder = state.responder_for(&headers);
    let Ok(items) = state.items.read() else {
        return responder.internal_server_error(ErrorContext::debug("item store poisoned").reported());
    };
    match items.iter().find(|i| i.id == id) {
        Some(item) => responder.record_show(Some(item)),
        None => responder.record_not_found(),
    }
}

async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<NewItem>,
) -> Result<ApiResponse, ResponseError> {
    let responder = state.responder_for(&headers);
    if let Err(errors) = input.validate() {
        return responder.record_not_created(&errors, ErrorContext::debug("POST /items validation"));
    }
    let Ok(mut items) = state.items.write() else {
        return responder.internal_server_error(ErrorContext::debug("item store poisoned").reported());
    };
    let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    items.push(Item { id, name: input.name });
    tracing::info!(id, "item created");
    Ok(responder.record_created())
}

async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<ApiResponse, ResponseError> {
    let responder = state.responder_for(&headers);
    let Ok(mut items) = state.items.write() else {
        return responder.record_not_deleted(
            "item store unavailable",
            ErrorContext::debug(format!("DELETE /items/{}: item store poisoned", id)).reported(),
        );
    };
    let Some(position) = items.iter().position(|i| i.id == id) else {
        return responder.record_not_found();
    };
    items.remove(position);
    Ok(responder.record_deleted())
}

async fn fallback(State(state): State<AppState>, headers: HeaderMap) -> Result<ApiResponse, ResponseError> {
    state.responder_for(&headers).page_not_found()
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list).post(create))
        .route("/items/:id", get(show).delete(delete))
        .fallback(fallback)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("api_responser=info,example_consumer=info")),
        )
        .init();

    let config = match std::env::var("RESPONDER_CONFIG") {
        Ok(path) => ResponderConfig::from_file(path)?,
        Err(_) => ResponderConfig::default(),
    };
    let state = AppState {
        responder: Responder::new(&config)?,
        items: Arc::new(RwLock::new(Vec::new())),
    };
    let router = app(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Example consumer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
