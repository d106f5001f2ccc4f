//! SeaORM implementation of LeitorRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::conversions::{leitor_to_domain, moto_to_domain};
use crate::domain::leitor::{Leitor, LeitorRepository};
use crate::domain::moto::Moto;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{leitor, moto, registro};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── SeaOrmLeitorRepository ──────────────────────────────────────

pub struct SeaOrmLeitorRepository {
    db: DatabaseConnection,
}

impl SeaOrmLeitorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeitorRepository for SeaOrmLeitorRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Leitor>> {
        let model = leitor::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(leitor_to_domain))
    }

    async fn find_with_motos(&self, id: i32) -> DomainResult<Option<(Leitor, Vec<Moto>)>> {
        let Some(model) = leitor::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let motos = moto::Entity::find()
            .filter(moto::Column::LeitorId.eq(id))
            .order_by_asc(moto::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(Some((
            leitor_to_domain(model),
            motos.into_iter().map(moto_to_domain).collect(),
        )))
    }

    async fn find_all(&self) -> DomainResult<Vec<Leitor>> {
        let models = leitor::Entity::find()
            .order_by_asc(leitor::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(leitor_to_domain).collect())
    }

    async fn find_all_with_motos(&self) -> DomainResult<Vec<(Leitor, Vec<Moto>)>> {
        let rows = leitor::Entity::find()
            .find_with_related(moto::Entity)
            .order_by_asc(leitor::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|(l, motos)| {
                (
                    leitor_to_domain(l),
                    motos.into_iter().map(moto_to_domain).collect(),
                )
            })
            .collect())
    }

    async fn insert(&self, l: Leitor) -> DomainResult<Leitor> {
        let model = leitor::ActiveModel {
            nome: Set(l.nome),
            localizacao: Set(l.localizacao),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;

        info!("Leitor saved: {} ({})", result.nome, result.id);
        Ok(leitor_to_domain(result))
    }

    async fn update(&self, l: Leitor) -> DomainResult<Leitor> {
        let existing = leitor::Entity::find_by_id(l.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Leitor", "id", l.id.to_string()));
        }

        let model = leitor::ActiveModel {
            id: Set(l.id),
            nome: Set(l.nome),
            localizacao: Set(l.localizacao),
        };
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(leitor_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Restrict policy: assigned motos and scan records pin the reader
        let assigned = moto::Entity::find()
            .filter(moto::Column::LeitorId.eq(id))
            .count(&txn)
            .await
            .map_err(db_err)?;
        if assigned > 0 {
            return Err(DomainError::conflict(format!(
                "leitor {} is referenced by {} moto(s)",
                id, assigned
            )));
        }

        let referencing = registro::Entity::find()
            .filter(registro::Column::LeitorId.eq(id))
            .count(&txn)
            .await
            .map_err(db_err)?;
        if referencing > 0 {
            return Err(DomainError::conflict(format!(
                "leitor {} is referenced by {} scan record(s)",
                id, referencing
            )));
        }

        let result = leitor::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Leitor", "id", id.to_string()));
        }
        txn.commit().await.map_err(db_err)?;

        info!("Leitor deleted: {}", id);
        Ok(())
    }
}
