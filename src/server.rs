//! HTTP front end for the converter.
//!
//! `/convert` accepts a Kognic record as the JSON body of a `GET` or `POST`
//! request and answers with the OpenLABEL document unchanged. Conversion
//! failures become `400 Bad Request` with a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{json, Value};

use crate::conversion::convert;
use crate::error::ConvertError;

/// Error type for HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Convert(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn convert_handler(Json(kognic): Json<Value>) -> Result<Json<Value>, ApiError> {
    debug!("Received conversion request");
    match convert(&kognic) {
        Ok(openlabel) => Ok(Json(openlabel)),
        Err(e) => {
            warn!("Rejected conversion request: {}", e);
            Err(e.into())
        }
    }
}

/// Routes served by the conversion API
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/convert", get(convert_handler).post(convert_handler))
}

/// Bind `host:port` and serve the API until the process stops
pub async fn serve(host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, router()).await
}
