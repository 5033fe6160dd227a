use models::fornecedor::{self, FornecedorInput};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::fornecedor::context::FornecedorContext;

pub const CREATE_FAILED: &str = "Houve um problema ao adicionar o fornecedor";
pub const UPDATE_FAILED: &str = "Houve um problema ao atualizar o fornecedor";
pub const DELETE_FAILED: &str = "Houve um problema ao deletar o fornecedor";

/// List every persisted supplier.
pub async fn list_fornecedores(
    db: &DatabaseConnection,
) -> Result<Vec<fornecedor::Model>, ServiceError> {
    let mut ctx = FornecedorContext::new(db);
    ctx.fetch_all().await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a supplier by id.
pub async fn get_fornecedor(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<fornecedor::Model>, ServiceError> {
    let mut ctx = FornecedorContext::new(db);
    ctx.find(id).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Validate and insert a supplier; the id is generated unless the payload carries one.
#[instrument(skip(db, input))]
pub async fn create_fornecedor(
    db: &DatabaseConnection,
    input: FornecedorInput,
) -> Result<fornecedor::Model, ServiceError> {
    let id = input.id_or_new();
    let model = input.into_model(id)?;

    let mut ctx = FornecedorContext::new(db);
    ctx.add(model.clone());
    let affected = ctx.save_changes().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if affected == 0 {
        warn!(%id, "create affected no rows");
        return Err(ServiceError::PersistenceFailed(CREATE_FAILED.into()));
    }
    info!(%id, "fornecedor created");
    Ok(model)
}

/// Replace every mutable field of an existing supplier.
///
/// Read-modify-write: the current row is read untracked to check existence,
/// then the payload is validated and a full-row update is saved. The path id
/// wins over any id in the payload.
#[instrument(skip(db, input))]
pub async fn update_fornecedor(
    db: &DatabaseConnection,
    id: Uuid,
    input: FornecedorInput,
) -> Result<(), ServiceError> {
    let mut ctx = FornecedorContext::new(db);
    let current = ctx.find_untracked(id).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if current.is_none() {
        return Err(ServiceError::not_found("fornecedor"));
    }

    let model = input.into_model(id)?;
    ctx.update(model);
    let affected = ctx.save_changes().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if affected == 0 {
        warn!(%id, "update affected no rows");
        return Err(ServiceError::PersistenceFailed(UPDATE_FAILED.into()));
    }
    info!(%id, "fornecedor updated");
    Ok(())
}

/// Delete an existing supplier.
#[instrument(skip(db))]
pub async fn delete_fornecedor(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let mut ctx = FornecedorContext::new(db);
    delete_in(&mut ctx, id).await
}

/// Delete through an existing context; a row already tracked by `ctx` counts as present.
async fn delete_in(ctx: &mut FornecedorContext<'_>, id: Uuid) -> Result<(), ServiceError> {
    let Some(existing) = ctx.find(id).await.map_err(|e| ServiceError::Db(e.to_string()))? else {
        return Err(ServiceError::not_found("fornecedor"));
    };

    ctx.remove(existing.id);
    let affected = ctx.save_changes().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if affected == 0 {
        warn!(%id, "delete affected no rows");
        return Err(ServiceError::PersistenceFailed(DELETE_FAILED.into()));
    }
    info!(%id, "fornecedor deleted");
    Ok(())
}
