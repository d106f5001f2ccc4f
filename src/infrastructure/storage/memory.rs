//! In-memory RepositoryProvider
//!
//! Backs the tracking service in tests and ephemeral runs. A single lock
//! guards all three tables so cross-table checks (foreign keys, restrict
//! deletes) observe one consistent snapshot, matching the transactional
//! behavior of the SeaORM store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::leitor::{Leitor, LeitorRepository};
use crate::domain::moto::{Moto, MotoRepository};
use crate::domain::registro::{Registro, RegistroDetalhado, RegistroRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

#[derive(Default)]
struct Tables {
    motos: BTreeMap<i32, Moto>,
    leitores: BTreeMap<i32, Leitor>,
    registros: BTreeMap<i32, Registro>,
}

/// Thread-safe in-memory store with monotonic id counters.
///
/// Identifiers are never reused, even after deletes.
pub struct MemoryStorage {
    tables: RwLock<Tables>,
    next_moto_id: AtomicI32,
    next_leitor_id: AtomicI32,
    next_registro_id: AtomicI32,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            next_moto_id: AtomicI32::new(1),
            next_leitor_id: AtomicI32::new(1),
            next_registro_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for MemoryStorage {
    fn motos(&self) -> &dyn MotoRepository {
        self
    }

    fn leitores(&self) -> &dyn LeitorRepository {
        self
    }

    fn registros(&self) -> &dyn RegistroRepository {
        self
    }
}

// ── MotoRepository ──────────────────────────────────────────────

#[async_trait]
impl MotoRepository for MemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Moto>> {
        let t = self.tables.read().await;
        Ok(t.motos.get(&id).cloned())
    }

    async fn find_with_leitor(&self, id: i32) -> DomainResult<Option<(Moto, Option<Leitor>)>> {
        let t = self.tables.read().await;
        Ok(t.motos.get(&id).map(|m| {
            let leitor = m.leitor_id.and_then(|lid| t.leitores.get(&lid).cloned());
            (m.clone(), leitor)
        }))
    }

    async fn find_all(&self) -> DomainResult<Vec<Moto>> {
        let t = self.tables.read().await;
        Ok(t.motos.values().cloned().collect())
    }

    async fn find_all_with_leitor(&self) -> DomainResult<Vec<(Moto, Option<Leitor>)>> {
        let t = self.tables.read().await;
        Ok(t.motos
            .values()
            .map(|m| {
                let leitor = m.leitor_id.and_then(|lid| t.leitores.get(&lid).cloned());
                (m.clone(), leitor)
            })
            .collect())
    }

    async fn insert(&self, mut m: Moto) -> DomainResult<Moto> {
        let mut t = self.tables.write().await;

        if let Some(leitor_id) = m.leitor_id {
            if !t.leitores.contains_key(&leitor_id) {
                return Err(DomainError::invalid_reference(format!(
                    "leitor_id={} does not exist",
                    leitor_id
                )));
            }
        }

        m.id = self.next_moto_id.fetch_add(1, Ordering::SeqCst);
        m.last_updated = Utc::now();
        t.motos.insert(m.id, m.clone());
        Ok(m)
    }

    async fn update(&self, mut m: Moto) -> DomainResult<Moto> {
        let mut t = self.tables.write().await;

        if !t.motos.contains_key(&m.id) {
            return Err(DomainError::not_found("Moto", "id", m.id.to_string()));
        }
        if let Some(leitor_id) = m.leitor_id {
            if !t.leitores.contains_key(&leitor_id) {
                return Err(DomainError::invalid_reference(format!(
                    "leitor_id={} does not exist",
                    leitor_id
                )));
            }
        }

        m.touch();
        t.motos.insert(m.id, m.clone());
        Ok(m)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut t = self.tables.write().await;

        let referencing = t.registros.values().filter(|r| r.moto_id == id).count();
        if referencing > 0 {
            return Err(DomainError::conflict(format!(
                "moto {} is referenced by {} scan record(s)",
                id, referencing
            )));
        }

        if t.motos.remove(&id).is_none() {
            return Err(DomainError::not_found("Moto", "id", id.to_string()));
        }
        Ok(())
    }
}

// ── LeitorRepository ────────────────────────────────────────────

#[async_trait]
impl LeitorRepository for MemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Leitor>> {
        let t = self.tables.read().await;
        Ok(t.leitores.get(&id).cloned())
    }

    async fn find_with_motos(&self, id: i32) -> DomainResult<Option<(Leitor, Vec<Moto>)>> {
        let t = self.tables.read().await;
        Ok(t.leitores.get(&id).map(|l| {
            let motos = t
                .motos
                .values()
                .filter(|m| m.leitor_id == Some(id))
                .cloned()
                .collect();
            (l.clone(), motos)
        }))
    }

    async fn find_all(&self) -> DomainResult<Vec<Leitor>> {
        let t = self.tables.read().await;
        Ok(t.leitores.values().cloned().collect())
    }

    async fn find_all_with_motos(&self) -> DomainResult<Vec<(Leitor, Vec<Moto>)>> {
        let t = self.tables.read().await;
        Ok(t.leitores
            .values()
            .map(|l| {
                let motos = t
                    .motos
                    .values()
                    .filter(|m| m.leitor_id == Some(l.id))
                    .cloned()
                    .collect();
                (l.clone(), motos)
            })
            .collect())
    }

    async fn insert(&self, mut l: Leitor) -> DomainResult<Leitor> {
        let mut t = self.tables.write().await;
        l.id = self.next_leitor_id.fetch_add(1, Ordering::SeqCst);
        t.leitores.insert(l.id, l.clone());
        Ok(l)
    }

    async fn update(&self, l: Leitor) -> DomainResult<Leitor> {
        let mut t = self.tables.write().await;
        if !t.leitores.contains_key(&l.id) {
            return Err(DomainError::not_found("Leitor", "id", l.id.to_string()));
        }
        t.leitores.insert(l.id, l.clone());
        Ok(l)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut t = self.tables.write().await;

        let assigned = t.motos.values().filter(|m| m.leitor_id == Some(id)).count();
        if assigned > 0 {
            return Err(DomainError::conflict(format!(
                "leitor {} is referenced by {} moto(s)",
                id, assigned
            )));
        }
        let referencing = t.registros.values().filter(|r| r.leitor_id == id).count();
        if referencing > 0 {
            return Err(DomainError::conflict(format!(
                "leitor {} is referenced by {} scan record(s)",
                id, referencing
            )));
        }

        if t.leitores.remove(&id).is_none() {
            return Err(DomainError::not_found("Leitor", "id", id.to_string()));
        }
        Ok(())
    }
}

// ── RegistroRepository ──────────────────────────────────────────

fn detalhado(t: &Tables, r: &Registro) -> DomainResult<RegistroDetalhado> {
    let moto = t.motos.get(&r.moto_id).cloned().ok_or_else(|| {
        DomainError::storage(format!(
            "registro {} references missing moto {}",
            r.id, r.moto_id
        ))
    })?;
    let leitor = t.leitores.get(&r.leitor_id).cloned().ok_or_else(|| {
        DomainError::storage(format!(
            "registro {} references missing leitor {}",
            r.id, r.leitor_id
        ))
    })?;
    Ok(RegistroDetalhado {
        registro: r.clone(),
        moto,
        leitor,
    })
}

/// Most recent first, ties broken by id descending.
fn sorted_desc(t: &Tables) -> Vec<&Registro> {
    let mut rows: Vec<&Registro> = t.registros.values().collect();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    rows
}

#[async_trait]
impl RegistroRepository for MemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Registro>> {
        let t = self.tables.read().await;
        Ok(t.registros.get(&id).cloned())
    }

    async fn find_detalhado(&self, id: i32) -> DomainResult<Option<RegistroDetalhado>> {
        let t = self.tables.read().await;
        match t.registros.get(&id) {
            Some(r) => Ok(Some(detalhado(&t, r)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<Registro>> {
        let t = self.tables.read().await;
        Ok(sorted_desc(&t).into_iter().cloned().collect())
    }

    async fn find_all_detalhado(&self) -> DomainResult<Vec<RegistroDetalhado>> {
        let t = self.tables.read().await;
        sorted_desc(&t).into_iter().map(|r| detalhado(&t, r)).collect()
    }

    async fn insert(&self, mut r: Registro) -> DomainResult<Registro> {
        let mut t = self.tables.write().await;

        if !t.motos.contains_key(&r.moto_id) {
            return Err(DomainError::invalid_reference(format!(
                "moto_id={} does not exist",
                r.moto_id
            )));
        }
        if !t.leitores.contains_key(&r.leitor_id) {
            return Err(DomainError::invalid_reference(format!(
                "leitor_id={} does not exist",
                r.leitor_id
            )));
        }

        r.id = self.next_registro_id.fetch_add(1, Ordering::SeqCst);
        r.timestamp = Utc::now();
        t.registros.insert(r.id, r.clone());
        Ok(r)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let mut t = self.tables.write().await;
        if t.registros.remove(&id).is_none() {
            return Err(DomainError::not_found("Registro", "id", id.to_string()));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moto::DEFAULT_STATUS;

    fn sample_moto(leitor_id: Option<i32>) -> Moto {
        Moto {
            id: 0,
            placa: "ABC1234".into(),
            modelo: "CG 160".into(),
            status: DEFAULT_STATUS.into(),
            leitor_id,
            last_updated: Utc::now(),
        }
    }

    fn sample_leitor() -> Leitor {
        Leitor {
            id: 0,
            nome: "Portão 1".into(),
            localizacao: "Entrada Principal".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_monotonic_and_never_reused() {
        let storage = MemoryStorage::new();
        let repos: &dyn RepositoryProvider = &storage;

        let a = repos.motos().insert(sample_moto(None)).await.unwrap();
        repos.motos().delete(a.id).await.unwrap();
        let b = repos.motos().insert(sample_moto(None)).await.unwrap();

        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn insert_with_unknown_leitor_is_rejected() {
        let storage = MemoryStorage::new();
        let repos: &dyn RepositoryProvider = &storage;

        let err = repos.motos().insert(sample_moto(Some(7))).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
        assert!(repos.motos().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn restrict_delete_mirrors_sql_store() {
        let storage = MemoryStorage::new();
        let repos: &dyn RepositoryProvider = &storage;

        let leitor = repos.leitores().insert(sample_leitor()).await.unwrap();
        let moto = repos.motos().insert(sample_moto(Some(leitor.id))).await.unwrap();

        let err = repos.leitores().delete(leitor.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let mut unassigned = moto.clone();
        unassigned.leitor_id = None;
        repos.motos().update(unassigned).await.unwrap();
        repos.leitores().delete(leitor.id).await.unwrap();
    }

    #[tokio::test]
    async fn trail_orders_by_timestamp_then_id_descending() {
        let storage = MemoryStorage::new();

        // Craft two records with the same timestamp directly
        let ts = Utc::now();
        {
            let mut t = storage.tables.try_write().unwrap();
            t.leitores.insert(
                1,
                Leitor {
                    id: 1,
                    nome: "Portão 1".into(),
                    localizacao: "Entrada".into(),
                },
            );
            let mut moto = sample_moto(None);
            moto.id = 1;
            t.motos.insert(1, moto);
            for id in [1, 2] {
                t.registros.insert(
                    id,
                    Registro {
                        id,
                        moto_id: 1,
                        leitor_id: 1,
                        timestamp: ts,
                    },
                );
            }
        }

        let repos: &dyn RepositoryProvider = &storage;
        let trail = repos.registros().find_all_detalhado().await.unwrap();
        let ids: Vec<i32> = trail.iter().map(|d| d.registro.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn dangling_required_reference_is_a_storage_error() {
        let storage = MemoryStorage::new();

        {
            let mut t = storage.tables.try_write().unwrap();
            t.registros.insert(
                1,
                Registro {
                    id: 1,
                    moto_id: 99,
                    leitor_id: 99,
                    timestamp: Utc::now(),
                },
            );
        }

        let repos: &dyn RepositoryProvider = &storage;
        let err = repos.registros().find_all_detalhado().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
