//! Leitor DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::moto::MotoDto;
use crate::domain::{Leitor, Moto};

/// RFID reader as exposed over the API.
///
/// `motos` carries the motos currently assigned to the reader on the
/// leitores surface; it is left empty when the reader is nested inside
/// another DTO.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeitorDto {
    pub id: i32,
    /// Human-readable identifier, e.g. "Portão 1"
    pub nome: String,
    /// Physical placement, e.g. "Entrada Principal"
    pub localizacao: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    #[schema(no_recursion)]
    pub motos: Vec<MotoDto>,
}

impl LeitorDto {
    pub fn with_motos(leitor: Leitor, motos: Vec<Moto>) -> Self {
        Self {
            motos: motos.into_iter().map(MotoDto::from).collect(),
            ..Self::from(leitor)
        }
    }
}

impl From<Leitor> for LeitorDto {
    fn from(l: Leitor) -> Self {
        Self {
            id: l.id,
            nome: l.nome,
            localizacao: l.localizacao,
            motos: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLeitorRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nome: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub localizacao: String,
}

/// Full replace; both fields are written as given.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLeitorRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nome: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub localizacao: String,
}
