//! Moto DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::leitor::LeitorDto;
use crate::domain::{Leitor, Moto};

/// Moto as exposed over the API, optionally carrying its assigned reader.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MotoDto {
    pub id: i32,
    /// License plate, e.g. "ABC1234"
    pub placa: String,
    pub modelo: String,
    pub status: String,
    pub leitor_id: Option<i32>,
    /// Present on joined reads; omitted on create/update responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leitor: Option<LeitorDto>,
    pub last_updated: DateTime<Utc>,
}

impl MotoDto {
    pub fn with_leitor(moto: Moto, leitor: Option<Leitor>) -> Self {
        Self {
            leitor: leitor.map(LeitorDto::from),
            ..Self::from(moto)
        }
    }
}

impl From<Moto> for MotoDto {
    fn from(m: Moto) -> Self {
        Self {
            id: m.id,
            placa: m.placa,
            modelo: m.modelo,
            status: m.status,
            leitor_id: m.leitor_id,
            leitor: None,
            last_updated: m.last_updated,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMotoRequest {
    #[validate(length(min = 1, max = 10, message = "must be 1-10 characters"))]
    pub placa: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub modelo: String,
    /// Defaults to "Disponível" when omitted or blank
    pub status: Option<String>,
    /// Reader to assign the moto to; must reference an existing leitor
    pub leitor_id: Option<i32>,
}

/// Full replace; every field is written as given.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMotoRequest {
    #[validate(length(min = 1, max = 10, message = "must be 1-10 characters"))]
    pub placa: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub modelo: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: String,
    pub leitor_id: Option<i32>,
}
