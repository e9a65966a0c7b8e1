//! Axum route handlers for the Render API.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::page_fill::{estimate_page_fill, PageFillAnalysis};
use crate::models::Resume;
use crate::render::document::DocumentTree;
use crate::render::html::{to_html, to_plain_text};
use crate::render::registry::{self, TemplateId, TemplateSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body shared by every render endpoint. The id is kept as a raw string so an
/// unknown value reaches the registry and comes back as `UNKNOWN_TEMPLATE`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: String,
    #[serde(default)]
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub template_id: TemplateId,
    pub document: DocumentTree,
    pub page_fill: PageFillAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
///
/// Lists every template in stable registry order for template pickers.
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(registry::list())
}

/// POST /api/v1/render
///
/// Renders the resume with the requested template and returns the DocumentTree
/// together with an advisory page-fill estimate.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let document = render_document(&state, &request)?;
    let page_fill = estimate_page_fill(&document, &state.page_config);

    info!(
        template = %document.template,
        sections = document.sections().len(),
        fill_ratio = page_fill.fill_ratio,
        "Rendered document"
    );

    Ok(Json(RenderResponse {
        template_id: document.template,
        document,
        page_fill,
    }))
}

/// POST /api/v1/render/html
///
/// Same input as `/render`; returns standalone HTML for print engines.
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let document = render_document(&state, &request)?;
    let html = to_html(&document);

    info!(template = %document.template, bytes = html.len(), "Rendered HTML");

    Ok(Html(html))
}

/// POST /api/v1/render/text
///
/// Same input as `/render`; returns reading-order plain text.
pub async fn handle_render_text(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let document = render_document(&state, &request)?;
    let text = to_plain_text(&document);

    info!(template = %document.template, bytes = text.len(), "Rendered plain text");

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

fn render_document(state: &AppState, request: &RenderRequest) -> Result<DocumentTree, AppError> {
    let entry = registry::resolve(&request.template_id)?;
    Ok(entry.render(&request.resume, &state.page_config))
}
