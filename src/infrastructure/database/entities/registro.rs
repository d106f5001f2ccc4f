//! RegistroLeituraRFID entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// RegistroLeituraRFID model - one immutable RFID detection event
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub moto_id: i32,

    pub leitor_id: i32,

    /// Assigned server-side at creation, never modified
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::moto::Entity",
        from = "Column::MotoId",
        to = "super::moto::Column::Id",
        on_delete = "Restrict"
    )]
    Moto,

    #[sea_orm(
        belongs_to = "super::leitor::Entity",
        from = "Column::LeitorId",
        to = "super::leitor::Column::Id",
        on_delete = "Restrict"
    )]
    Leitor,
}

impl Related<super::moto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moto.def()
    }
}

impl Related<super::leitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leitor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
