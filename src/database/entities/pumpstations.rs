use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{PumpClassification, PumpType, ZoomCategory};

/// Pump between two connection nodes. Start/stop levels are measured at the
/// suction or delivery side, depending on `pump_type`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pumpstations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    pub classification: Option<PumpClassification>,
    pub pump_type: Option<PumpType>,
    pub sewerage: bool,
    pub start_level: Option<f64>,
    pub lower_stop_level: Option<f64>,
    pub upper_stop_level: Option<f64>,
    /// Pump capacity in L/s
    pub capacity: Option<f64>,
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
}

impl ActiveModelBehavior for ActiveModel {}
