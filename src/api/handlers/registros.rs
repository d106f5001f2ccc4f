//! Registro (scan log) handlers
//!
//! The log is append-only: entries are created and deleted, never updated,
//! so there is no PUT route here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{error_response, TrackingState};
use crate::api::dto::{ApiResponse, CreateRegistroRequest, RegistroDto};
use crate::api::validated_json::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/v1/registros",
    tag = "Registros",
    responses(
        (status = 200, description = "Scan log, most recent first", body = ApiResponse<Vec<RegistroDto>>)
    )
)]
pub async fn list_registros(
    State(state): State<TrackingState>,
) -> Result<Json<ApiResponse<Vec<RegistroDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let registros = state
        .service
        .list_registros()
        .await
        .map_err(error_response)?;

    let items: Vec<RegistroDto> = registros.into_iter().map(RegistroDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/registros/{id}",
    tag = "Registros",
    params(("id" = i32, Path, description = "Registro id")),
    responses(
        (status = 200, description = "Scan record details", body = ApiResponse<RegistroDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_registro(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RegistroDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let registro = state
        .service
        .get_registro(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(RegistroDto::from(registro))))
}

#[utoipa::path(
    post,
    path = "/api/v1/registros",
    tag = "Registros",
    request_body = CreateRegistroRequest,
    responses(
        (status = 201, description = "Scan recorded, timestamp assigned server-side", body = ApiResponse<RegistroDto>),
        (status = 422, description = "Unknown moto_id or leitor_id")
    )
)]
pub async fn create_registro(
    State(state): State<TrackingState>,
    ValidatedJson(request): ValidatedJson<CreateRegistroRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegistroDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let registro = state
        .service
        .create_registro(request.moto_id, request.leitor_id)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RegistroDto::from(registro))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/registros/{id}",
    tag = "Registros",
    params(("id" = i32, Path, description = "Registro id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_registro(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .delete_registro(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
