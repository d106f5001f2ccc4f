//! SeaORM implementation of RegistroRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::conversions::{leitor_to_domain, moto_to_domain, registro_to_domain};
use crate::domain::leitor::Leitor;
use crate::domain::moto::Moto;
use crate::domain::registro::{Registro, RegistroDetalhado, RegistroRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{leitor, moto, registro};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

async fn ensure_moto_exists<C: ConnectionTrait>(conn: &C, moto_id: i32) -> DomainResult<()> {
    let exists = moto::Entity::find_by_id(moto_id)
        .one(conn)
        .await
        .map_err(db_err)?;
    if exists.is_none() {
        return Err(DomainError::invalid_reference(format!(
            "moto_id={} does not exist",
            moto_id
        )));
    }
    Ok(())
}

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

// ── SeaOrmRegistroRepository ────────────────────────────────────

pub struct SeaOrmRegistroRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegistroRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the motos and leitores referenced by `rows` in two batch queries
    /// and assemble the joined records, preserving the order of `rows`.
    async fn assemble_detalhado(
        &self,
        rows: Vec<registro::Model>,
    ) -> DomainResult<Vec<RegistroDetalhado>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let moto_ids: Vec<i32> = rows.iter().map(|r| r.moto_id).collect();
        let leitor_ids: Vec<i32> = rows.iter().map(|r| r.leitor_id).collect();

        let motos: HashMap<i32, Moto> = moto::Entity::find()
            .filter(moto::Column::Id.is_in(moto_ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| (m.id, moto_to_domain(m)))
            .collect();

        let leitores: HashMap<i32, Leitor> = leitor::Entity::find()
            .filter(leitor::Column::Id.is_in(leitor_ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|l| (l.id, leitor_to_domain(l)))
            .collect();

        rows.into_iter()
            .map(|r| {
                // Both references are required; a missing side means the
                // store lost integrity, not an absent association.
                let moto = motos.get(&r.moto_id).cloned().ok_or_else(|| {
                    DomainError::storage(format!(
                        "registro {} references missing moto {}",
                        r.id, r.moto_id
                    ))
                })?;
                let leitor = leitores.get(&r.leitor_id).cloned().ok_or_else(|| {
                    DomainError::storage(format!(
                        "registro {} references missing leitor {}",
                        r.id, r.leitor_id
                    ))
                })?;
                Ok(RegistroDetalhado {
                    registro: registro_to_domain(r),
                    moto,
                    leitor,
                })
            })
            .collect()
    }
}

#[async_trait]
impl RegistroRepository for SeaOrmRegistroRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Registro>> {
        let model = registro::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(registro_to_domain))
    }

    async fn find_detalhado(&self, id: i32) -> DomainResult<Option<RegistroDetalhado>> {
        let Some(model) = registro::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut joined = self.assemble_detalhado(vec![model]).await?;
        Ok(joined.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<Registro>> {
        let models = registro::Entity::find()
            .order_by_desc(registro::Column::Timestamp)
            .order_by_desc(registro::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(registro_to_domain).collect())
    }

    async fn find_all_detalhado(&self) -> DomainResult<Vec<RegistroDetalhado>> {
        let rows = registro::Entity::find()
            .order_by_desc(registro::Column::Timestamp)
            .order_by_desc(registro::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        self.assemble_detalhado(rows).await
    }

    async fn insert(&self, r: Registro) -> DomainResult<Registro> {
        let txn = self.db.begin().await.map_err(db_err)?;

        ensure_moto_exists(&txn, r.moto_id).await?;
        ensure_leitor_exists(&txn, r.leitor_id).await?;

        let model = registro::ActiveModel {
            moto_id: Set(r.moto_id),
            leitor_id: Set(r.leitor_id),
            timestamp: Set(Utc::now()),
            ..Default::default()
        };
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(
            "Registro saved: moto {} at leitor {} ({})",
            result.moto_id, result.leitor_id, result.id
        );
        Ok(registro_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = registro::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Registro", "id", id.to_string()));
        }

        info!("Registro deleted: {}", id);
        Ok(())
    }
}
