use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{CalculationType, FrictionType, Material, SewerageType, ZoomCategory};

/// Closed conduit between two connection nodes. No geometry of its own;
/// the line is implied by its endpoints.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    /// Special-profile number; width, height and shape stay empty when set
    pub profile_num: Option<i32>,
    pub sewerage_type: Option<SewerageType>,
    pub calculation_type: Option<CalculationType>,
    pub invert_level_start_point: Option<f64>,
    pub invert_level_end_point: Option<f64>,
    pub cross_section_definition_id: Option<i32>,
    pub friction_value: Option<f64>,
    pub friction_type: Option<FrictionType>,
    pub dist_calc_points: Option<f64>,
    pub material: Option<Material>,
    /// Real length as recorded in the source data
    pub original_length: Option<f64>,
    pub zoom_category: Option<ZoomCategory>,
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
