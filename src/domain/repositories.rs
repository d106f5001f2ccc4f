//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::leitor::LeitorRepository;
use super::moto::MotoRepository;
use super::registro::RegistroRepository;

pub use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
///
/// The tracking service holds one of these and requests only the repository
/// it needs:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let moto = repos.motos().find_by_id(1).await?;
///     let trail = repos.registros().find_all_detalhado().await?;
/// }
/// ```
///
/// Production wires in the SeaORM implementation; tests substitute the
/// in-memory one.
pub trait RepositoryProvider: Send + Sync {
    fn motos(&self) -> &dyn MotoRepository;
    fn leitores(&self) -> &dyn LeitorRepository;
    fn registros(&self) -> &dyn RegistroRepository;
}
