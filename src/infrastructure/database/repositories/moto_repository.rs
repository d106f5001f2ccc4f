//! SeaORM implementation of MotoRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::conversions::{leitor_to_domain, moto_to_domain};
use crate::domain::leitor::Leitor;
use crate::domain::moto::{Moto, MotoRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{leitor, moto, registro};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Check the referenced reader exists before writing a row that points at it.
///
/// Runs on the surrounding transaction so a concurrent reader delete cannot
/// slip between the check and the write.
async fn ensure_leitor_exists<C: ConnectionTrait>(conn: &C, leitor_id: i32) -> DomainResult<()> {
    let exists = leitor::Entity::find_by_id(leitor_id)
        .one(conn)
        .await
        .map_err(db_err)?;
    if exists.is_none() {
        return Err(DomainError::invalid_reference(format!(
            "leitor_id={} does not exist",
            leitor_id
        )));
    }
    Ok(())
}

// ── SeaOrmMotoRepository ────────────────────────────────────────

pub struct SeaOrmMotoRepository {
    db: DatabaseConnection,
}

impl SeaOrmMotoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MotoRepository for SeaOrmMotoRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Moto>> {
        let model = moto::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(moto_to_domain))
    }

    async fn find_with_leitor(&self, id: i32) -> DomainResult<Option<(Moto, Option<Leitor>)>> {
        let row = moto::Entity::find_by_id(id)
            .find_also_related(leitor::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(|(m, l)| (moto_to_domain(m), l.map(leitor_to_domain))))
    }

    async fn find_all(&self) -> DomainResult<Vec<Moto>> {
        let models = moto::Entity::find()
            .order_by_asc(moto::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(moto_to_domain).collect())
    }

    async fn find_all_with_leitor(&self) -> DomainResult<Vec<(Moto, Option<Leitor>)>> {
        let rows = moto::Entity::find()
            .find_also_related(leitor::Entity)
            .order_by_asc(moto::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|(m, l)| (moto_to_domain(m), l.map(leitor_to_domain)))
            .collect())
    }

    async fn insert(&self, m: Moto) -> DomainResult<Moto> {
        let txn = self.db.begin().await.map_err(db_err)?;

        if let Some(leitor_id) = m.leitor_id {
            ensure_leitor_exists(&txn, leitor_id).await?;
        }

        let model = moto::ActiveModel {
            placa: Set(m.placa),
            modelo: Set(m.modelo),
            status: Set(m.status),
            leitor_id: Set(m.leitor_id),
            last_updated: Set(Utc::now()),
            ..Default::default()
        };
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!("Moto saved: {} ({})", result.placa, result.id);
        Ok(moto_to_domain(result))
    }

    async fn update(&self, m: Moto) -> DomainResult<Moto> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = moto::Entity::find_by_id(m.id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Moto", "id", m.id.to_string()));
        }

        if let Some(leitor_id) = m.leitor_id {
            ensure_leitor_exists(&txn, leitor_id).await?;
        }

        let model = moto::ActiveModel {
            id: Set(m.id),
            placa: Set(m.placa),
            modelo: Set(m.modelo),
            status: Set(m.status),
            leitor_id: Set(m.leitor_id),
            last_updated: Set(Utc::now()),
        };
        let result = model.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(moto_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Restrict policy: scan records keep their history
        let referencing = registro::Entity::find()
            .filter(registro::Column::MotoId.eq(id))
            .count(&txn)
            .await
            .map_err(db_err)?;
        if referencing > 0 {
            return Err(DomainError::conflict(format!(
                "moto {} is referenced by {} scan record(s)",
                id, referencing
            )));
        }

        let result = moto::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Moto", "id", id.to_string()));
        }
        txn.commit().await.map_err(db_err)?;

        info!("Moto deleted: {}", id);
        Ok(())
    }
}
