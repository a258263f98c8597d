use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Groups weighted measure locations; only a primary key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_measure_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::control_measure_maps::Entity")]
    ControlMeasureMaps,
    #[sea_orm(has_many = "super::controls::Entity")]
    Controls,
}

impl Related<super::control_measure_maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlMeasureMaps.def()
    }
}

impl Related<super::controls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Controls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
