//! Axum route handlers for the agent API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{personalized_to_csv, CSV_FILE_NAME};
use crate::generation::generator::generate_assets;
use crate::models::bundle::{AssetBundle, OutreachRow};
use crate::models::profile::{validate, GenerateAssetsRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportCsvRequest {
    pub personalized: Vec<OutreachRow>,
}

/// POST /api/agent
///
/// Validates the submitted business profile and returns the generated asset
/// bundle. Validation and generation failures both surface as 400 with a
/// flat `{"error": ...}` body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateAssetsRequest>,
) -> Result<Json<AssetBundle>, AppError> {
    let profile = validate(request)?;
    let bundle = generate_assets(state.backend.as_ref(), &profile).await?;
    Ok(Json(bundle))
}

/// POST /api/agent/csv
///
/// Renders a personalized-outreach table as a downloadable CSV attachment.
pub async fn handle_export_csv(
    Json(request): Json<ExportCsvRequest>,
) -> Result<Response, AppError> {
    if request.personalized.is_empty() {
        return Err(AppError::Validation(
            "personalized must contain at least one row".to_string(),
        ));
    }

    let csv = personalized_to_csv(&request.personalized)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
