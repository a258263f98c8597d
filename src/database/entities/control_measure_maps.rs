use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One monitored object inside a measure group. The weights of a group
/// must sum to 1.0; `ControlService::validate_measure_group` checks this.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_measure_maps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub measure_group_id: Option<i32>,
    /// Names the monitored table, e.g. connection_nodes
    pub object_type: Option<String>,
    pub object_id: Option<i32>,
    /// Between 0 and 1, two decimals
    pub weight: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::control_measure_groups::Entity",
        from = "Column::MeasureGroupId",
        to = "super::control_measure_groups::Column::Id"
    )]
    ControlMeasureGroups,
}

impl Related<super::control_measure_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlMeasureGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
