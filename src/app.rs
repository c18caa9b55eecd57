use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{HTML_FILE_NAME, JSON_FILE_NAME};
use crate::errors::DemoResult;
use crate::generator::Artifacts;
use crate::models::ApiDocument;
use crate::routes::{artifacts, health};

pub const SWAGGER_SPEC_ROUTE: &str = "/api-docs/openapi.json";

#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<Artifacts>,
    pub title: Arc<str>,
    pub paths: usize,
    pub schemas: usize,
}

impl AppState {
    pub fn new(doc: &ApiDocument) -> DemoResult<Self> {
        Ok(Self {
            artifacts: Arc::new(Artifacts::render(doc)?),
            title: Arc::from(doc.info.title.as_str()),
            paths: doc.paths.len(),
            schemas: doc.components.schemas.len(),
        })
    }
}

/// Router serving the rendered artifacts; rendering happens once, here.
pub fn create_app(doc: &ApiDocument) -> DemoResult<Router> {
    let state = AppState::new(doc)?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let swagger_config = utoipa_swagger_ui::Config::new([SWAGGER_SPEC_ROUTE]).try_it_out_enabled(true);

    let router = Router::new()
        .route("/", get(artifacts::index))
        .route(&format!("/{JSON_FILE_NAME}"), get(artifacts::openapi_json))
        .route(&format!("/{HTML_FILE_NAME}"), get(artifacts::documentation))
        .route(SWAGGER_SPEC_ROUTE, get(artifacts::openapi_json))
        .route("/health", get(health::health))
        .fallback(artifacts::not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").config(swagger_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
