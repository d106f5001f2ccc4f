pub mod leitor;
pub mod moto;
pub mod registro;
pub mod repositories;

// Re-export commonly used types
pub use leitor::{Leitor, LeitorRepository};
pub use moto::{Moto, MotoRepository};
pub use registro::{Registro, RegistroDetalhado, RegistroRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
