use thiserror::Error;

/// Errors surfaced by the domain and storage layers.
///
/// Every fallible operation in the service returns one of these variants so
/// the HTTP layer can map failures to status codes in a single place.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The referenced entity does not exist.
    #[error("{entity} not found: {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A field on the incoming payload failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A foreign key points at an entity that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The operation would violate a relational constraint.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_key() {
        let err = DomainError::not_found("Moto", "id", "42");
        assert_eq!(err.to_string(), "Moto not found: id=42");
    }

    #[test]
    fn invalid_reference_formats_message() {
        let err = DomainError::invalid_reference("leitor_id=7 does not exist");
        assert_eq!(err.to_string(), "invalid reference: leitor_id=7 does not exist");
    }

    #[test]
    fn conflict_formats_message() {
        let err = DomainError::conflict("leitor 3 is referenced by 2 motos");
        assert_eq!(err.to_string(), "conflict: leitor 3 is referenced by 2 motos");
    }
}
