//! Request handlers for all resources

pub mod health;
pub mod leitores;
pub mod motos;
pub mod registros;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::TrackingService;
use crate::domain::DomainError;

/// Shared state for the moto, leitor and registro routes.
#[derive(Clone)]
pub struct TrackingState {
    pub service: Arc<TrackingService>,
}

/// Map a domain failure onto the HTTP error contract.
///
/// NotFound → 404, InvalidInput/InvalidReference → 422, Conflict → 409,
/// Storage → 500. The message always travels in the response envelope.
pub(crate) fn error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidInput(_) | DomainError::InvalidReference(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, _) = error_response(DomainError::not_found("Moto", "id", "7"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_and_reference_map_to_422() {
        let (status, _) = error_response(DomainError::invalid_input("placa must not be empty"));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = error_response(DomainError::invalid_reference("Leitor 999 not found"));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn conflict_maps_to_409() {
        let (status, _) = error_response(DomainError::conflict("Leitor 1 is referenced"));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn storage_maps_to_500() {
        let (status, body) = error_response(DomainError::storage("connection lost"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.0.success);
        assert!(body.0.error.is_some());
    }
}
