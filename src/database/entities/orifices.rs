use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{FrictionType, ZoomCategory};

/// Orifice structure between two connection nodes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orifices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    pub crest_level: Option<f64>,
    pub sewerage: bool,
    pub cross_section_definition_id: Option<i32>,
    pub friction_value: Option<f64>,
    pub friction_type: Option<FrictionType>,
    pub discharge_coefficient_positive: Option<f64>,
    pub discharge_coefficient_negative: Option<f64>,
    pub zoom_category: Option<ZoomCategory>,
    pub crest_type: Option<i32>,
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
