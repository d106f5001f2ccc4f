//! Leitor management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{error_response, TrackingState};
use crate::api::dto::{ApiResponse, CreateLeitorRequest, LeitorDto, UpdateLeitorRequest};
use crate::api::validated_json::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/v1/leitores",
    tag = "Leitores",
    responses(
        (status = 200, description = "All readers with their assigned motos", body = ApiResponse<Vec<LeitorDto>>)
    )
)]
pub async fn list_leitores(
    State(state): State<TrackingState>,
) -> Result<Json<ApiResponse<Vec<LeitorDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let leitores = state.service.list_leitores().await.map_err(error_response)?;

    let items: Vec<LeitorDto> = leitores
        .into_iter()
        .map(|(leitor, motos)| LeitorDto::with_motos(leitor, motos))
        .collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/leitores/{id}",
    tag = "Leitores",
    params(("id" = i32, Path, description = "Leitor id")),
    responses(
        (status = 200, description = "Reader details", body = ApiResponse<LeitorDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_leitor(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<LeitorDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let (leitor, motos) = state.service.get_leitor(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(LeitorDto::with_motos(
        leitor, motos,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/leitores",
    tag = "Leitores",
    request_body = CreateLeitorRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<LeitorDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_leitor(
    State(state): State<TrackingState>,
    ValidatedJson(request): ValidatedJson<CreateLeitorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LeitorDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let leitor = state
        .service
        .create_leitor(request.nome, request.localizacao)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(LeitorDto::from(leitor))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/leitores/{id}",
    tag = "Leitores",
    params(("id" = i32, Path, description = "Leitor id")),
    request_body = UpdateLeitorRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<LeitorDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_leitor(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateLeitorRequest>,
) -> Result<Json<ApiResponse<LeitorDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let leitor = state
        .service
        .update_leitor(id, request.nome, request.localizacao)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(LeitorDto::from(leitor))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/leitores/{id}",
    tag = "Leitores",
    params(("id" = i32, Path, description = "Leitor id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Reader is referenced by motos or scan records")
    )
)]
pub async fn delete_leitor(
    State(state): State<TrackingState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .delete_leitor(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
