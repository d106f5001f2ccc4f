//! LeitorRFID repository interface

use async_trait::async_trait;

use super::model::Leitor;
use crate::domain::moto::Moto;
use crate::domain::DomainResult;

#[async_trait]
pub trait LeitorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Leitor>>;

    /// Fetch a reader together with the motos currently assigned to it.
    async fn find_with_motos(&self, id: i32) -> DomainResult<Option<(Leitor, Vec<Moto>)>>;

    async fn find_all(&self) -> DomainResult<Vec<Leitor>>;

    /// List all readers, each joined with its currently assigned motos.
    async fn find_all_with_motos(&self) -> DomainResult<Vec<(Leitor, Vec<Moto>)>>;

    /// Persist a new reader. The input `id` is ignored; the store assigns a
    /// fresh one.
    async fn insert(&self, leitor: Leitor) -> DomainResult<Leitor>;

    /// Full-replace update keyed by `leitor.id`.
    async fn update(&self, leitor: Leitor) -> DomainResult<Leitor>;

    /// Delete a reader. Fails with `Conflict` while any moto or scan record
    /// still references it.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
