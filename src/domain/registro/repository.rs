//! RegistroLeituraRFID repository interface

use async_trait::async_trait;

use super::model::{Registro, RegistroDetalhado};
use crate::domain::DomainResult;

#[async_trait]
pub trait RegistroRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Registro>>;

    /// Fetch a scan record joined with its moto and reader.
    async fn find_detalhado(&self, id: i32) -> DomainResult<Option<RegistroDetalhado>>;

    /// List all scan records, most recent first (`timestamp` descending,
    /// ties broken by `id` descending).
    async fn find_all(&self) -> DomainResult<Vec<Registro>>;

    /// Same ordering as [`find_all`](Self::find_all), joined with the moto
    /// and reader of each record.
    async fn find_all_detalhado(&self) -> DomainResult<Vec<RegistroDetalhado>>;

    /// Append a new scan record. The input `id` and `timestamp` are ignored;
    /// the store assigns a fresh id and the current time. Fails with
    /// `InvalidReference` when `moto_id` or `leitor_id` does not exist.
    async fn insert(&self, registro: Registro) -> DomainResult<Registro>;

    /// Delete a scan record. Records are otherwise immutable.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
