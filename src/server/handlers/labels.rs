//! Label API handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::fields::LabelItem;
use crate::job::{LabelJob, default_file_name};
use crate::layout::{Dimensions, LayoutConfig};

use super::super::state::AppState;

/// Request body for generation and preview.
#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    #[serde(default)]
    pub items: Vec<LabelItem>,
    /// Falls back to the server's default layout when omitted.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

impl LabelRequest {
    fn into_job(self, state: &AppState) -> LabelJob {
        LabelJob::new(
            self.items,
            self.layout.unwrap_or(state.config.default_layout),
        )
    }
}

/// GET /api/labels/defaults - Default layout.
pub async fn defaults(State(state): State<Arc<AppState>>) -> Json<LayoutConfig> {
    Json(state.config.default_layout)
}

/// POST /api/labels/dimensions - Printable size of a layout, in dots.
pub async fn dimensions(
    payload: Result<Json<LayoutConfig>, JsonRejection>,
) -> Result<Json<Dimensions>, Response> {
    let layout = json_body(payload)?;
    Ok(Json(crate::labels::query_dimensions(&layout)))
}

/// POST /api/labels/zpl - Generate the ZPL document as a download.
pub async fn zpl(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LabelRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let job = json_body(payload)?.into_job(&state);
    let zpl = job.to_zpl();
    let file_name = default_file_name(chrono::Local::now());

    log::info!(
        "generated {} ({} item(s), {} bytes)",
        file_name,
        job.items.len(),
        zpl.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        zpl,
    )
        .into_response())
}

/// POST /api/labels/preview - Render the label row as PNG.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LabelRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let job = json_body(payload)?.into_job(&state);

    match job.to_preview_png() {
        Ok(png_bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response()),
        Err(e) => {
            log::warn!("preview failed: {}", e);
            Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()))
        }
    }
}

/// Unwrap a JSON body, turning a rejection into the JSON error shape.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            log::warn!("rejected request body: {}", rejection.body_text());
            Err(error_response(rejection.status(), &rejection.body_text()))
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "error": message}))).into_response()
}
