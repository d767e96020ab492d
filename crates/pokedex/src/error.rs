use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Failure talking to an upstream API
///
/// None of these are handled by the request pipeline itself; they bubble up
/// to the boundary and become a generic 500.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

/// Problem-details body returned on every non-success response
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
}

/// Outcome of a failed pokedex operation
///
/// One variant per non-success response shape; the boundary maps each to its
/// status code and problem-details body.
#[derive(Debug)]
pub enum ApiError {
    /// Name failed validation; carries the first violated rule's message
    InvalidName(String),
    /// Upstream reports the pokemon does not exist; carries the requested name
    NotFound(String),
    /// Anything else from the info upstream, surfaced as a generic 500
    Internal(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, problem) = match self {
            ApiError::InvalidName(detail) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails {
                    title: "Invalid Pokémon Name".to_string(),
                    detail,
                },
            ),
            ApiError::NotFound(name) => (
                StatusCode::NOT_FOUND,
                ProblemDetails {
                    title: "Pokemon Not Found".to_string(),
                    detail: format!("Pokemon '{name}' does not exist."),
                },
            ),
            ApiError::Internal(err) => {
                log::error!("Unhandled upstream error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        title: "An unexpected error occurred".to_string(),
                        detail: err.to_string(),
                    },
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}
