use actix_web::http::header;
use actix_web::{web, HttpResponse};
use std::time::Instant;

use crate::models::GenerateRequest;
use super::error::{ApiError, ApiResult};
use super::state::ApiState;

pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PACKAGE_FILENAME: &str = "BC_Package.xlsx";

/// Generate the BC import package for the posted invoices
pub async fn generate_excel(
    body: web::Json<GenerateRequest>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let mut request = body.into_inner();

    // Rejected before any template is loaded
    let invoices = request
        .take_invoices()
        .ok_or_else(|| ApiError::bad_request("No invoices provided"))?;

    let start = Instant::now();
    let invoice_count = invoices.len();

    let bytes = state
        .generator
        .generate(invoices, request.inline_template())
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate BC package: {}", e);
            ApiError::from(e)
        })?;

    tracing::info!(
        invoices = invoice_count,
        size_bytes = bytes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "BC package sent"
    );

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", PACKAGE_FILENAME),
        ))
        .body(bytes))
}

/// OPTIONS without the full preflight headers; answered as permissively as a
/// real preflight, with an empty body.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}
