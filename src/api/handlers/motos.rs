//! Moto management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{error_response, TrackingState};
use crate::api::dto::{ApiResponse, CreateMotoRequest, MotoDto, UpdateMotoRequest};
use crate::api::validated_json::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/v1/motos",
    tag = "Motos",
    responses(
        (status = 200, description = "All motos with their assigned readers", body = ApiResponse<Vec<MotoDto>>)
    )
)]
pub async fn list_motos(
    State(state): State<TrackingState>,
) -> Result<Json<ApiResponse<Vec<MotoDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let motos = state.service.list_motos().await.map_err(error_response)?;

    let items: Vec<MotoDto> = motos
        .into_iter()
        .map(|(moto, leitor)| MotoDto::with_leitor(moto, leitor))
        .collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/motos/{id}",
    tag = "Motos",
    params(("id" = i32, Path, description = "Moto id")),
    responses(
        (status = 200, description = "Moto details", body = ApiResponse<MotoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_moto(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MotoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let (moto, leitor) = state.service.get_moto(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(MotoDto::with_leitor(moto, leitor))))
}

#[utoipa::path(
    post,
    path = "/api/v1/motos",
    tag = "Motos",
    request_body = CreateMotoRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<MotoDto>),
        (status = 422, description = "Validation error or unknown leitor_id")
    )
)]
pub async fn create_moto(
    State(state): State<TrackingState>,
    ValidatedJson(request): ValidatedJson<CreateMotoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MotoDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let moto = state
        .service
        .create_moto(
            request.placa,
            request.modelo,
            request.status,
            request.leitor_id,
        )
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MotoDto::from(moto))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/motos/{id}",
    tag = "Motos",
    params(("id" = i32, Path, description = "Moto id")),
    request_body = UpdateMotoRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<MotoDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error or unknown leitor_id")
    )
)]
pub async fn update_moto(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateMotoRequest>,
) -> Result<Json<ApiResponse<MotoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let moto = state
        .service
        .update_moto(
            id,
            request.placa,
            request.modelo,
            request.status,
            request.leitor_id,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(MotoDto::from(moto))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/motos/{id}",
    tag = "Motos",
    params(("id" = i32, Path, description = "Moto id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Moto is referenced by scan records")
    )
)]
pub async fn delete_moto(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.service.delete_moto(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
