//! Create `fornecedor` table.
//!
//! Single supplier table; `documento` is indexed for lookups by tax document.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fornecedor::Table)
                    .if_not_exists()
                    .col(uuid(Fornecedor::Id).primary_key())
                    .col(string_len(Fornecedor::Nome, 200).not_null())
                    .col(string_len(Fornecedor::Documento, 14).not_null())
                    .col(boolean(Fornecedor::Ativo).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fornecedor_documento")
                    .table(Fornecedor::Table)
                    .col(Fornecedor::Documento)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fornecedor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fornecedor {
    Table,
    Id,
    Nome,
    Documento,
    Ativo,
}
