//! RegistroLeituraRFID domain entity

use chrono::{DateTime, Utc};

use crate::domain::leitor::Leitor;
use crate::domain::moto::Moto;

/// Immutable record of one RFID detection: moto X was seen by reader Y at
/// time T. Records are append-only; there is no update operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Registro {
    pub id: i32,
    pub moto_id: i32,
    pub leitor_id: i32,
    /// Assigned by the store at creation time; callers cannot backdate it.
    pub timestamp: DateTime<Utc>,
}

/// A scan record joined with the moto and reader it references.
///
/// Both references are required, so a missing side is a store integrity
/// failure rather than an absent association.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistroDetalhado {
    pub registro: Registro,
    pub moto: Moto,
    pub leitor: Leitor,
}
