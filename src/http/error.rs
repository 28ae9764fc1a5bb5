//! Boundary responder: resolver errors to JSON envelopes.
//!
//! # Responsibilities
//! - Map `ResolveError` variants to status codes and error envelopes
//! - Embed the usage manual so callers can self-correct
//! - Never leak a bare stack trace; every error path answers JSON

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::guide;
use crate::routing::ResolveError;

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        match self {
            ResolveError::Upstream(cause) => {
                tracing::error!(error = %cause, "Upstream FIPE query failed");
                let body = guide::merge(
                    json!({
                        "error": "Erro ao consultar a FIPE",
                        "message": "Não foi possível obter os dados da tabela FIPE. Tente novamente mais tarde.",
                        "detalhes": cause.to_string()
                    }),
                    guide::manual(),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            ResolveError::NotFound { message } => {
                let body = guide::merge(
                    json!({
                        "error": "Dados não encontrados",
                        "message": message
                    }),
                    guide::manual(),
                );
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ResolveError::Internal(cause) => {
                tracing::error!(error = %cause, "Unexpected internal error");
                let body = guide::merge(
                    json!({
                        "error": "Erro interno do servidor",
                        "message": cause.to_string()
                    }),
                    guide::manual(),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// The catch-all answer for requests matching no route shape.
pub fn route_not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Json(guide::route_not_found())).into_response()
}
