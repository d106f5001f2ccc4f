//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod conversions;
pub mod leitor_repository;
pub mod moto_repository;
pub mod registro_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;
