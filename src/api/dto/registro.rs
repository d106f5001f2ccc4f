//! Registro DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::leitor::LeitorDto;
use super::moto::MotoDto;
use crate::domain::{Registro, RegistroDetalhado};

/// Scan log entry as exposed over the API.
///
/// Joined reads carry the moto and reader involved in the detection;
/// the create response carries only the foreign keys.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistroDto {
    pub id: i32,
    pub moto_id: i32,
    pub leitor_id: i32,
    /// Assigned server-side when the scan is recorded
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moto: Option<MotoDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leitor: Option<LeitorDto>,
}

impl From<Registro> for RegistroDto {
    fn from(r: Registro) -> Self {
        Self {
            id: r.id,
            moto_id: r.moto_id,
            leitor_id: r.leitor_id,
            timestamp: r.timestamp,
            moto: None,
            leitor: None,
        }
    }
}

impl From<RegistroDetalhado> for RegistroDto {
    fn from(d: RegistroDetalhado) -> Self {
        Self {
            moto: Some(MotoDto::from(d.moto)),
            leitor: Some(LeitorDto::from(d.leitor)),
            ..Self::from(d.registro)
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRegistroRequest {
    /// Moto that was detected; must reference an existing moto
    pub moto_id: i32,
    /// Reader that performed the detection; must reference an existing leitor
    pub leitor_id: i32,
}
