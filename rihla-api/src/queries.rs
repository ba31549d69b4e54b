use axum::{extract::State, routing::post, Json, Router};
use rihla_core::{Language, ParsedQuery, RawInput};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    /// Detected from the text when absent
    pub language: Option<Language>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/queries/parse", post(parse_query))
}

/// POST /v1/queries/parse
/// Run the search-line parser without starting a search.
async fn parse_query(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParsedQuery>, AppError> {
    let text = req.text.trim();
    let input = match req.language {
        Some(language) => RawInput::new(text, language),
        None => RawInput::detect(text),
    };

    let query = state.parser.parse(&input).await.map_err(AppError::Unparseable)?;
    Ok(Json(query))
}
