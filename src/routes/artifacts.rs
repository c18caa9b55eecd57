use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::{Html, IntoResponse};

use crate::app::AppState;
use crate::config::{HTML_FILE_NAME, JSON_FILE_NAME};
use crate::errors::{DemoError, DemoResult};
use crate::html;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub async fn index(State(state): State<AppState>) -> DemoResult<Html<String>> {
    let json_href = format!("/{JSON_FILE_NAME}");
    let html_href = format!("/{HTML_FILE_NAME}");
    let links = [
        (html_href.as_str(), "📖 Документация API"),
        (json_href.as_str(), "📋 OpenAPI спецификация (JSON)"),
        ("/docs", "🧪 Swagger UI"),
    ];
    Ok(Html(html::render_index(&state.title, &links)?))
}

pub async fn openapi_json(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        state.artifacts.json.clone(),
    )
}

pub async fn documentation(State(state): State<AppState>) -> Html<String> {
    Html(state.artifacts.html.clone())
}

pub async fn not_found(uri: Uri) -> DemoError {
    tracing::debug!(%uri, "no such document");
    DemoError::not_found(uri.path().to_string())
}
