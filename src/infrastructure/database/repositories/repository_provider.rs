//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::leitor::LeitorRepository;
use crate::domain::moto::MotoRepository;
use crate::domain::registro::RegistroRepository;
use crate::domain::repositories::RepositoryProvider;

use super::leitor_repository::SeaOrmLeitorRepository;
use super::moto_repository::SeaOrmMotoRepository;
use super::registro_repository::SeaOrmRegistroRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let moto = repos.motos().find_by_id(1).await?;
/// let trail = repos.registros().find_all_detalhado().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    motos: SeaOrmMotoRepository,
    leitores: SeaOrmLeitorRepository,
    registros: SeaOrmRegistroRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            motos: SeaOrmMotoRepository::new(db.clone()),
            leitores: SeaOrmLeitorRepository::new(db.clone()),
            registros: SeaOrmRegistroRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn motos(&self) -> &dyn MotoRepository {
        &self.motos
    }

    fn leitores(&self) -> &dyn LeitorRepository {
        &self.leitores
    }

    fn registros(&self) -> &dyn RegistroRepository {
        &self.registros
    }
}

// ── Tests ──────────────────────────────────────────────────────
