//! Migration to create leitores table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leitores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leitores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leitores::Nome).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Leitores::Localizacao)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leitores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Leitores {
    Table,
    Id,
    Nome,
    Localizacao,
}
