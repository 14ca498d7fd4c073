//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::recommendation::text::render_text;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize)]
pub struct OutputQuery {
    #[serde(default)]
    pub output: OutputFormat,
}

/// GET /recommendations/:member_id?output=json|text
///
/// `json` (default) returns `{member_id, recommendations}`; `text` returns the
/// same result as a readable block. Unknown members are a 404.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    query: Result<Query<OutputQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let result = state.recommender.get_recommendations(&member_id).await?;

    Ok(match query.output {
        OutputFormat::Json => Json(result).into_response(),
        OutputFormat::Text => render_text(&result).into_response(),
    })
}
