//! Moto domain entity

use chrono::{DateTime, Utc};

use crate::shared::errors::DomainResult;
use crate::shared::validations::{validate_max_len, validate_required_text};

/// Status assigned to a moto when none is provided at registration.
pub const DEFAULT_STATUS: &str = "Disponível";

/// Maximum accepted length for a license plate.
pub const PLACA_MAX_LEN: usize = 10;

/// Motorcycle fitted with an RFID tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Moto {
    pub id: i32,
    /// License plate, e.g. "ABC1234".
    pub placa: String,
    pub modelo: String,
    /// Free-form operational status, e.g. "Disponível", "Em manutenção".
    pub status: String,
    /// Reader this moto is currently assigned to, if any.
    pub leitor_id: Option<i32>,
    /// Set at registration and refreshed on every update.
    pub last_updated: DateTime<Utc>,
}

impl Moto {
    /// Validate the writable fields against the registration rules.
    pub fn validate(&self) -> DomainResult<()> {
        validate_required_text("placa", &self.placa)?;
        validate_max_len("placa", &self.placa, PLACA_MAX_LEN)?;
        validate_required_text("modelo", &self.modelo)?;
        validate_required_text("status", &self.status)?;
        Ok(())
    }

    /// Refresh the last-updated timestamp.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────
