//! LeitorRFID domain entity

use crate::shared::errors::DomainResult;
use crate::shared::validations::validate_required_text;

/// Fixed RFID reader installed at a known location.
///
/// The set of motos currently assigned to a reader is derived at query time
/// from `Moto.leitor_id`; it is never stored on the reader itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Leitor {
    pub id: i32,
    /// Human-readable identifier, e.g. "Portão 1".
    pub nome: String,
    /// Physical placement, e.g. "Entrada Principal".
    pub localizacao: String,
}

impl Leitor {
    /// Validate the writable fields.
    pub fn validate(&self) -> DomainResult<()> {
        validate_required_text("nome", &self.nome)?;
        validate_required_text("localizacao", &self.localizacao)?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_leitor_passes() {
        let l = Leitor {
            id: 1,
            nome: "Portão 1".into(),
            localizacao: "Entrada Principal".into(),
        };
        assert!(l.validate().is_ok());
    }

    #[test]
    fn empty_nome_is_rejected() {
        let l = Leitor {
            id: 1,
            nome: "".into(),
            localizacao: "Entrada".into(),
        };
        assert!(l.validate().is_err());
    }

    #[test]
    fn whitespace_localizacao_is_rejected() {
        let l = Leitor {
            id: 1,
            nome: "Portão 1".into(),
            localizacao: "   ".into(),
        };
        assert!(l.validate().is_err());
    }
}
