use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{CalculationType, ZoomCategory};

/// Open watercourse between two connection nodes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "channels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    /// The original code that came from the provider/organisation
    pub code: String,
    pub calculation_type: Option<CalculationType>,
    /// Distance between calculation points along the line
    pub dist_calc_points: Option<f64>,
    pub zoom_category: Option<ZoomCategory>,
    pub connection_node_start_id: Option<i32>,
    pub connection_node_end_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub the_geom: String,
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
    #[sea_orm(has_many = "super::cross_section_locations::Entity")]
    CrossSectionLocations,
}

impl Related<super::cross_section_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrossSectionLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
