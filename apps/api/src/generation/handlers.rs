//! Axum route handlers for the generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_dpr_package, GeneratedPackage};
use crate::models::brief::ProjectBrief;
use crate::state::AppState;

/// POST /generate
///
/// Accepts a project brief and runs the full pipeline. On success returns
/// the package identifier, category, template name and artifact paths; any
/// uncaught pipeline failure surfaces as a 500 with the underlying message.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(brief): Json<ProjectBrief>,
) -> Result<Json<GeneratedPackage>, AppError> {
    if brief.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if brief.short_description.trim().is_empty() {
        return Err(AppError::Validation(
            "short_description cannot be empty".to_string(),
        ));
    }

    let package = generate_dpr_package(&state, &brief)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(package))
}
