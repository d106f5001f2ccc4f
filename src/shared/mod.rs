pub mod errors;
pub mod shutdown;
pub mod validations;

pub use errors::{DomainError, DomainResult};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
