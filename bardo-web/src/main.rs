//! Servidor web Axum para visualização da limpeza de texto e das tabelas de rima

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use bardo_core::{
    demo::demo_texts,
    segmenter::{self, SentenceMode},
    RhymeAnalyzer, RhymeTable, Segment, TextCleaner,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Estado compartilhado da aplicação. `TextCleaner` e `RhymeAnalyzer` são somente
/// leitura depois de construídos, seguros para compartilhar entre handlers.
struct AppState {
    cleaner: TextCleaner,
    analyzer: RhymeAnalyzer,
}

/// Passos de limpeza endereçáveis individualmente pela UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum CleanStep {
    Metadata,
    References,
    Contractions,
    Quotes,
    Emphasis,
    BlankLines,
    LeadingSpaces,
}

#[derive(Deserialize)]
struct CleanRequest {
    text: String,
    /// Perfil de metadados; padrão "gutenberg".
    #[serde(default)]
    profile: Option<String>,
    /// Passos a aplicar, em ordem. Ausente = limpeza completa de referência.
    #[serde(default)]
    steps: Option<Vec<CleanStep>>,
}

#[derive(Serialize)]
struct CleanResponse {
    text: String,
}

#[derive(Deserialize)]
struct RhymesRequest {
    text: String,
}

#[derive(Serialize)]
struct RhymesResponse {
    table: RhymeTable,
    processing_ms: u64,
}

#[derive(Deserialize)]
struct SegmentRequest {
    text: String,
    unit: SegmentUnit,
    #[serde(default)]
    mode: Option<SentenceMode>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SegmentUnit {
    Words,
    Sentences,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let state = Arc::new(AppState {
        cleaner: TextCleaner::new(),
        analyzer: RhymeAnalyzer::new().expect("cliente HTTP do oráculo de rimas"),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/clean", post(clean_handler))
        .route("/rhymes", post(rhymes_handler))
        .route("/segment", post(segment_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Servidor bardo iniciado em http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Limpeza de texto: passos escolhidos pela UI ou a limpeza completa
async fn clean_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CleanRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response();
    }

    let profile = req.profile.as_deref().unwrap_or("gutenberg");
    let steps = req.steps.clone().unwrap_or_else(|| {
        vec![
            CleanStep::Metadata,
            CleanStep::References,
            CleanStep::Quotes,
            CleanStep::Emphasis,
            CleanStep::LeadingSpaces,
        ]
    });

    let cleaner = &state.cleaner;
    let mut text = req.text.clone();
    for step in steps {
        text = match step {
            CleanStep::Metadata => match cleaner.strip_metadata(&text, profile) {
                Ok(stripped) => stripped,
                Err(err) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(serde_json::json!({"error": err.to_string()})),
                    )
                        .into_response();
                }
            },
            CleanStep::References => cleaner.remove_references(&text),
            CleanStep::Contractions => cleaner.substitute_contractions(&text, None),
            CleanStep::Quotes => cleaner.strip_quotes(&text),
            CleanStep::Emphasis => cleaner.remove_emphasis(&text),
            CleanStep::BlankLines => cleaner.remove_blank_lines(&text, "\n\n"),
            CleanStep::LeadingSpaces => cleaner.remove_leading_spaces(&text),
        };
    }

    Json(CleanResponse { text }).into_response()
}

/// Análise de rimas: roda o analisador (bloqueante, pode ir à rede) fora do runtime
async fn rhymes_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RhymesRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response();
    }

    info!("analisando rimas: {} chars", req.text.len());
    let start = Instant::now();
    let state_for_task = Arc::clone(&state);
    let text = req.text.clone();
    let table = tokio::task::spawn_blocking(move || state_for_task.analyzer.analyze_block(&text))
        .await
        .unwrap_or_default();

    Json(RhymesResponse {
        table,
        processing_ms: start.elapsed().as_millis() as u64,
    })
    .into_response()
}

/// Segmentação em palavras ou sentenças
async fn segment_handler(Json(req): Json<SegmentRequest>) -> impl IntoResponse {
    let mode = req.mode.unwrap_or_default();
    let segments: Vec<Segment> = match req.unit {
        SegmentUnit::Words => segmenter::word_segments(&req.text),
        SegmentUnit::Sentences => segmenter::sentence_segments(&req.text, mode),
    };
    Json(segments)
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(title, text)| {
            serde_json::json!({
                "title": title,
                "text": text
            })
        })
        .collect();
    Json(texts)
}
