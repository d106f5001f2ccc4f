//! Moto entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Moto model - a motorcycle fitted with an RFID tag
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "motos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// License plate
    pub placa: String,

    pub modelo: String,

    /// Operational status, defaults to "Disponível"
    pub status: String,

    /// Reader this moto is currently assigned to
    pub leitor_id: Option<i32>,

    /// Refreshed on every update
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leitor::Entity",
        from = "Column::LeitorId",
        to = "super::leitor::Column::Id",
        on_delete = "Restrict"
    )]
    Leitor,

    #[sea_orm(has_many = "super::registro::Entity")]
    Registros,
}

impl Related<super::leitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leitor.def()
    }
}

impl Related<super::registro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registros.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
