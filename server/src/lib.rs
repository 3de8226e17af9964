use anyhow::{Context, Result};
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vsm_core::corpus::{load_corpus, load_stopwords};
use vsm_core::search::DEFAULT_KEYWORDS;
use vsm_core::{CollectionStats, DocumentReport, SearchHit, SearchOptions, Stopwords, TermFilter, TextCollection};

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_keywords")]
    pub keywords: usize,
}
fn default_k() -> usize { 10 }
fn default_keywords() -> usize { DEFAULT_KEYWORDS }

#[derive(Deserialize)]
pub struct DocParams {
    #[serde(default = "default_keywords")]
    pub keywords: usize,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub terms: vsm_core::Query,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Shared, read-only search state. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub collection: Arc<TextCollection>,
    pub filter: Arc<TermFilter>,
}

/// Build the collection from disk and wrap it in a router.
pub fn load_app(corpus: &FsPath, stopwords: Option<&FsPath>) -> Result<Router> {
    let stopwords = match stopwords {
        Some(path) => load_stopwords(path)?,
        None => Stopwords::english(),
    };
    let filter = TermFilter::new(stopwords);
    let paragraphs = load_corpus(corpus)?;
    let collection = TextCollection::build(&paragraphs, &filter)
        .with_context(|| format!("building collection from {}", corpus.display()))?;
    Ok(build_app(Arc::new(collection), filter))
}

pub fn build_app(collection: Arc<TextCollection>, filter: TermFilter) -> Router {
    let state = AppState { collection, filter: Arc::new(filter) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let query = state.filter.query(&params.q);
    let options = SearchOptions { top_k: params.k.clamp(1, MAX_K), keywords: params.keywords };
    let result = state.collection.search(&query, options);
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(q = %params.q, total_hits = result.total_hits, took_s, "search");
    Json(SearchResponse {
        query: params.q,
        terms: result.query,
        took_s,
        total_hits: result.total_hits,
        results: result.hits,
    })
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<u32>,
    Query(params): Query<DocParams>,
) -> Result<Json<DocumentReport>, ApiError> {
    state
        .collection
        .document_report(doc_id, params.keywords)
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("document {doc_id} not found")))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<CollectionStats> {
    Json(state.collection.stats())
}
