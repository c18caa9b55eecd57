use anyhow::Result;
use axum::body::{self, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use trading_api_demo::{build_document, create_app, Artifacts};

fn app() -> Result<Router> {
    Ok(create_app(&build_document())?)
}

async fn get(app: Router, uri: &str) -> Result<Response> {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    Ok(app.oneshot(req).await?)
}

async fn body_text(resp: Response) -> Result<String> {
    let bytes = body::to_bytes(resp.into_body(), 10_485_760).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

fn content_type(resp: &Response) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn health_reports_document_shape() -> Result<()> {
    let resp = get(app()?, "/health").await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let v: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(v["status"], "ok");
    assert_eq!(v["paths"], 3);
    assert_eq!(v["schemas"], 4);
    Ok(())
}

#[tokio::test]
async fn serves_generated_json() -> Result<()> {
    let expected = Artifacts::render(&build_document())?;

    for uri in ["/openapi_demo.json", "/api-docs/openapi.json"] {
        let resp = get(app()?, uri).await?;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        assert!(content_type(&resp).starts_with("application/json"), "GET {uri}");
        assert_eq!(body_text(resp).await?, expected.json, "GET {uri}");
    }
    Ok(())
}

#[tokio::test]
async fn serves_generated_html() -> Result<()> {
    let resp = get(app()?, "/api_documentation_demo.html").await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("text/html"));

    let html = body_text(resp).await?;
    assert!(html.contains("Trading API - Демо версия"));
    assert_eq!(html.matches("<div class=\"endpoint\">").count(), 3);
    Ok(())
}

#[tokio::test]
async fn index_links_artifacts() -> Result<()> {
    let resp = get(app()?, "/").await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await?;
    assert!(html.contains("href=\"/api_documentation_demo.html\""));
    assert!(html.contains("href=\"/openapi_demo.json\""));
    assert!(html.contains("href=\"/docs\""));
    Ok(())
}

#[tokio::test]
async fn unknown_path_returns_json_404() -> Result<()> {
    let resp = get(app()?, "/redoc-documentation.html").await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let v: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(v["error"], "not_found");
    assert!(v["message"]
        .as_str()
        .unwrap_or_default()
        .contains("/redoc-documentation.html"));
    Ok(())
}

#[tokio::test]
async fn swagger_ui_is_mounted_under_docs() -> Result<()> {
    let resp = get(app()?, "/docs/").await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("text/html"));
    Ok(())
}
