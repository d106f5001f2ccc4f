//! Migration to create motos table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create motos table
        manager
            .create_table(
                Table::create()
                    .table(Motos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Motos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Motos::Placa).string_len(10).not_null())
                    .col(ColumnDef::new(Motos::Modelo).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Motos::Status)
                            .string_len(50)
                            .not_null()
                            .default("Disponível"),
                    )
                    .col(ColumnDef::new(Motos::LeitorId).integer().null())
                    .col(
                        ColumnDef::new(Motos::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_motos_leitor")
                            .from(Motos::Table, Motos::LeitorId)
                            .to(Leitores::Table, Leitores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_motos_leitor_id")
                    .table(Motos::Table)
                    .col(Motos::LeitorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_motos_placa")
                    .table(Motos::Table)
                    .col(Motos::Placa)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Motos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Motos {
    Table,
    Id,
    Placa,
    Modelo,
    Status,
    LeitorId,
    LastUpdated,
}

#[derive(Iden)]
enum Leitores {
    Table,
    Id,
}
