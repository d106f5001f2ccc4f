//! Migration to create registros table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create registros table
        manager
            .create_table(
                Table::create()
                    .table(Registros::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registros::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Registros::MotoId).integer().not_null())
                    .col(ColumnDef::new(Registros::LeitorId).integer().not_null())
                    .col(
                        ColumnDef::new(Registros::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registros_moto")
                            .from(Registros::Table, Registros::MotoId)
                            .to(Motos::Table, Motos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registros_leitor")
                            .from(Registros::Table, Registros::LeitorId)
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
                    .name("idx_registros_moto_id")
                    .table(Registros::Table)
                    .col(Registros::MotoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_registros_leitor_id")
                    .table(Registros::Table)
                    .col(Registros::LeitorId)
                    .to_owned(),
            )
            .await?;

        // The detection trail is always listed most recent first
        manager
            .create_index(
                Index::create()
                    .name("idx_registros_timestamp")
                    .table(Registros::Table)
                    .col(Registros::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registros::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Registros {
    Table,
    Id,
    MotoId,
    LeitorId,
    Timestamp,
}

#[derive(Iden)]
enum Motos {
    Table,
    Id,
}

#[derive(Iden)]
enum Leitores {
    Table,
    Id,
}
