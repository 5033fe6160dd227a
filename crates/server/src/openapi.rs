use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct FornecedorDoc {
    pub id: Uuid,
    pub nome: String,
    pub documento: String,
    pub ativo: bool,
}

#[derive(ToSchema)]
pub struct FornecedorInputDoc {
    /// Generated by the server when absent.
    pub id: Option<Uuid>,
    /// Required, at most 200 characters.
    pub nome: String,
    /// Required, at most 14 characters.
    pub documento: String,
    pub ativo: bool,
}

#[derive(ToSchema, Serialize)]
pub struct ValidationProblemDoc {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    /// Field name to violation messages.
    pub errors: std::collections::HashMap<String, Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::fornecedor::list,
        crate::routes::fornecedor::get,
        crate::routes::fornecedor::create,
        crate::routes::fornecedor::update,
        crate::routes::fornecedor::delete,
    ),
    components(
        schemas(
            HealthResponse,
            FornecedorDoc,
            FornecedorInputDoc,
            ValidationProblemDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Fornecedor")
    )
)]
pub struct ApiDoc;

/// Served only in development.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
