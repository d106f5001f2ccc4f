//! LeitorRFID entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// LeitorRFID model - a fixed RFID reader installed at a known location
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leitores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Human-readable identifier, e.g. "Portão 1"
    pub nome: String,

    /// Physical placement, e.g. "Entrada Principal"
    pub localizacao: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::moto::Entity")]
    Motos,

    #[sea_orm(has_many = "super::registro::Entity")]
    Registros,
}

impl Related<super::moto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motos.def()
    }
}

impl Related<super::registro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registros.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
