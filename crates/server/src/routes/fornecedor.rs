use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use models::fornecedor::{self, FornecedorInput};
use service::fornecedor as fornecedor_service;
use tracing::info;
use uuid::Uuid;

use crate::{errors::ApiError, observability, state::ServerState};

type Created = (StatusCode, [(header::HeaderName, String); 1], Json<fornecedor::Model>);

#[utoipa::path(
    get, path = "/fornecedor", tag = "Fornecedor",
    responses(
        (status = 200, description = "All suppliers", body = [crate::openapi::FornecedorDoc])
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<fornecedor::Model>>, ApiError> {
    let started = Instant::now();
    let res = fornecedor_service::list_fornecedores(&state.db)
        .await
        .map_err(ApiError::from);
    observability::record("list", &res, started);
    let list = res?;
    info!(count = list.len(), "list fornecedores");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/fornecedor/{id}", tag = "Fornecedor",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::FornecedorDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<fornecedor::Model>, ApiError> {
    let started = Instant::now();
    let res = match fornecedor_service::get_fornecedor(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::from(e)),
    };
    observability::record("get", &res, started);
    res
}

#[utoipa::path(
    post, path = "/fornecedor", tag = "Fornecedor",
    request_body = crate::openapi::FornecedorInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::FornecedorDoc),
        (
            status = 400,
            description = "Validation Error or save failure",
            body = crate::openapi::ValidationProblemDoc
        )
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<FornecedorInput>,
) -> Result<Created, ApiError> {
    let started = Instant::now();
    let res = fornecedor_service::create_fornecedor(&state.db, input)
        .await
        .map_err(ApiError::from);
    observability::record("create", &res, started);
    let m = res?;
    let location = format!("/fornecedor/{}", m.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(m)))
}

#[utoipa::path(
    put, path = "/fornecedor/{id}", tag = "Fornecedor",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    request_body = crate::openapi::FornecedorInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (
            status = 400,
            description = "Validation Error or save failure",
            body = crate::openapi::ValidationProblemDoc
        ),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<FornecedorInput>,
) -> Result<StatusCode, ApiError> {
    let started = Instant::now();
    let res = fornecedor_service::update_fornecedor(&state.db, id, input)
        .await
        .map_err(ApiError::from);
    observability::record("update", &res, started);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/fornecedor/{id}", tag = "Fornecedor",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Delete Failed"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let started = Instant::now();
    let res = fornecedor_service::delete_fornecedor(&state.db, id)
        .await
        .map_err(ApiError::from);
    observability::record("delete", &res, started);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
