use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{FrictionType, ZoomCategory};

/// Weir structure between two connection nodes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weirs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    pub crest_level: Option<f64>,
    /// See `WeirCrestKind` for the known codes; unconstrained in the data
    pub crest_type: Option<i32>,
    pub cross_section_definition_id: Option<i32>,
    pub sewerage: bool,
    pub discharge_coefficient_positive: Option<f64>,
    pub discharge_coefficient_negative: Option<f64>,
    pub external: Option<bool>,
    pub zoom_category: Option<ZoomCategory>,
    pub friction_value: Option<f64>,
    pub friction_type: Option<FrictionType>,
    pub connection_node_start_id: Option<i32>,
    pub connection_node_end_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::connection_nodes::Entity",
        from = "Column::ConnectionNodeStartId",
        to = "super::connection_nodes::Column::Id"
    )]
    ConnectionNodeStart,
    #[sea_orm(
        belongs_to = "super::connection_nodes::Entity",
        from = "Column::ConnectionNodeEndId",
        to = "super::connection_nodes::Column::Id"
    )]
    ConnectionNodeEnd,
    #[sea_orm(
        belongs_to = "super::cross_section_definitions::Entity",
        from = "Column::CrossSectionDefinitionId",
        to = "super::cross_section_definitions::Column::Id"
    )]
    CrossSectionDefinitions,
}

impl Related<super::cross_section_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrossSectionDefinitions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
