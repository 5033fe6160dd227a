//! Per-request unit of work over the `fornecedor` table.
//!
//! Reads go straight to the database. Writes are queued as [`PendingChange`]s
//! and applied together inside one transaction by
//! [`FornecedorContext::save_changes`], which reports the rows affected.
//! Rows loaded through [`FornecedorContext::find`] or
//! [`FornecedorContext::fetch_all`] enter an identity map and later lookups
//! for the same id are served from it.

use std::collections::HashMap;

use models::fornecedor::{self, Entity as FornecedorEntity};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingChange {
    Added(fornecedor::Model),
    /// Full-row replace keyed by the model's id.
    Updated(fornecedor::Model),
    Removed(Uuid),
}

pub struct FornecedorContext<'a> {
    db: &'a DatabaseConnection,
    tracked: HashMap<Uuid, fornecedor::Model>,
    pending: Vec<PendingChange>,
}

impl<'a> FornecedorContext<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db, tracked: HashMap::new(), pending: Vec::new() }
    }

    pub async fn fetch_all(&mut self) -> Result<Vec<fornecedor::Model>, DbErr> {
        let rows = FornecedorEntity::find().all(self.db).await?;
        for row in &rows {
            self.tracked.entry(row.id).or_insert_with(|| row.clone());
        }
        Ok(rows)
    }

    /// Identity-map lookup, falling back to the database.
    pub async fn find(&mut self, id: Uuid) -> Result<Option<fornecedor::Model>, DbErr> {
        if let Some(m) = self.tracked.get(&id) {
            return Ok(Some(m.clone()));
        }
        let found = FornecedorEntity::find_by_id(id).one(self.db).await?;
        if let Some(m) = &found {
            self.tracked.insert(id, m.clone());
        }
        Ok(found)
    }

    /// Read the current row without tracking it.
    pub async fn find_untracked(&self, id: Uuid) -> Result<Option<fornecedor::Model>, DbErr> {
        FornecedorEntity::find_by_id(id).one(self.db).await
    }

    pub fn add(&mut self, model: fornecedor::Model) {
        self.tracked.insert(model.id, model.clone());
        self.pending.push(PendingChange::Added(model));
    }

    pub fn update(&mut self, model: fornecedor::Model) {
        self.tracked.insert(model.id, model.clone());
        self.pending.push(PendingChange::Updated(model));
    }

    pub fn remove(&mut self, id: Uuid) {
        self.tracked.remove(&id);
        self.pending.push(PendingChange::Removed(id));
    }

    pub fn pending(&self) -> &[PendingChange] { &self.pending }

    pub fn has_changes(&self) -> bool { !self.pending.is_empty() }

    /// Apply every pending change in one transaction and return the total rows affected.
    /// On error the transaction is rolled back and the pending changes are kept.
    pub async fn save_changes(&mut self) -> Result<u64, DbErr> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let txn = self.db.begin().await?;
        let mut affected = 0u64;
        for change in &self.pending {
            affected += match change {
                PendingChange::Added(m) => {
                    let am = fornecedor::ActiveModel {
                        id: Set(m.id),
                        nome: Set(m.nome.clone()),
                        documento: Set(m.documento.clone()),
                        ativo: Set(m.ativo),
                    };
                    FornecedorEntity::insert(am).exec_without_returning(&txn).await?
                }
                PendingChange::Updated(m) => {
                    let am = fornecedor::ActiveModel {
                        id: NotSet,
                        nome: Set(m.nome.clone()),
                        documento: Set(m.documento.clone()),
                        ativo: Set(m.ativo),
                    };
                    FornecedorEntity::update_many()
                        .set(am)
                        .filter(fornecedor::Column::Id.eq(m.id))
                        .exec(&txn)
                        .await?
                        .rows_affected
                }
                PendingChange::Removed(id) => {
                    FornecedorEntity::delete_by_id(*id).exec(&txn).await?.rows_affected
                }
            };
        }
        txn.commit().await?;
        debug!(changes = self.pending.len(), affected, "fornecedor changes saved");
        self.pending.clear();
        Ok(affected)
    }
}
