use std::sync::Arc;
use axum::{routing::post, Router, Json};
use tower_http::cors::{CorsLayer, Any};
use serde::{Deserialize, Serialize};
use axum::http::StatusCode;
use tracing::{info, warn};
use crate::convert::{self, INVALID_INPUT};
use crate::interface::Navigator;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub fragment: String,
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub value: String,
    pub from_base: u32,
    pub to_base: u32,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn router(interface: Arc<Navigator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/render", post(move |Json(req): Json<RenderRequest>| {
            let navigator = Arc::clone(&interface);
            async move {
                // Rendering is synchronous today, so it runs on a blocking thread.
                let started = std::time::Instant::now();
                let fragment = req.fragment.clone();
                let filter = req.filter.clone();
                let view_result = tokio::task::spawn_blocking(move || {
                    navigator.render(&fragment, filter.as_deref())
                }).await.map_err(|e| {
                    warn!(error=%e, "Join error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
                })?;
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                match view_result {
                    Ok(view) => {
                        info!(ms=elapsed_ms, fallback=view.fallback, title=%view.title, "render complete");
                        let status = if view.fallback { "not-found" } else { "ok" };
                        let body = RenderResponse { status: status.into(), elapsed_ms, title: Some(view.title), markup: Some(view.markup), fallback: Some(view.fallback), error: None };
                        Ok::<_, (StatusCode, &'static str)>((StatusCode::OK, Json(body)))
                    }
                    Err(e) => {
                        let msg = format!("{e}");
                        warn!(%msg, "render error");
                        let body = RenderResponse { status: "error".into(), elapsed_ms, title: None, markup: None, fallback: None, error: Some(msg) };
                        Ok::<_, (StatusCode, &'static str)>((StatusCode::INTERNAL_SERVER_ERROR, Json(body)))
                    }
                }
            }
        }))
        .route("/v1/convert", post(|Json(req): Json<ConvertRequest>| {
            async move {
                let body = match convert::convert(&req.value, req.from_base, req.to_base) {
                    Some(result) => {
                        info!(from=req.from_base, to=req.to_base, "conversion complete");
                        ConvertResponse { status: "ok".into(), result: Some(result), error: None }
                    }
                    // Invalid input is an ordinary outcome, not a server error.
                    None => ConvertResponse { status: "invalid".into(), result: None, error: Some(INVALID_INPUT.into()) },
                };
                Json(body)
            }
        }))
        .layer(cors)
}
