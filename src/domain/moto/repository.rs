//! Moto repository interface

use async_trait::async_trait;

use super::model::Moto;
use crate::domain::leitor::Leitor;
use crate::domain::DomainResult;

#[async_trait]
pub trait MotoRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Moto>>;

    /// Fetch a moto together with its assigned reader, if any.
    async fn find_with_leitor(&self, id: i32) -> DomainResult<Option<(Moto, Option<Leitor>)>>;

    async fn find_all(&self) -> DomainResult<Vec<Moto>>;

    /// List all motos, each joined with its assigned reader.
    async fn find_all_with_leitor(&self) -> DomainResult<Vec<(Moto, Option<Leitor>)>>;

    /// Persist a new moto. The input `id` is ignored; the store assigns a
    /// fresh one. Fails with `InvalidReference` when `leitor_id` points at a
    /// reader that does not exist.
    async fn insert(&self, moto: Moto) -> DomainResult<Moto>;

    /// Full-replace update keyed by `moto.id`. Fails with `NotFound` when the
    /// row is gone and `InvalidReference` on a dangling `leitor_id`.
    async fn update(&self, moto: Moto) -> DomainResult<Moto>;

    /// Delete a moto. Fails with `Conflict` while scan records still
    /// reference it.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
