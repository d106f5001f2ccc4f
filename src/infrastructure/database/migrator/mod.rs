//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_leitores;
mod m20250301_000002_create_motos;
mod m20250301_000003_create_registros;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_leitores::Migration),
            Box::new(m20250301_000002_create_motos::Migration),
            Box::new(m20250301_000003_create_registros::Migration),
        ]
    }
}
