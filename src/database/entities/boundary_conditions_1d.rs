use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::BoundaryType;

/// Prescribed timeseries on a single connection node
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boundary_conditions_1d")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub connection_node_id: i32,
    pub boundary_type: Option<BoundaryType>,
    /// Rows of `<seconds>,<value>`
    #[sea_orm(column_type = "Text", nullable)]
    pub timeseries: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::connection_nodes::Entity",
        from = "Column::ConnectionNodeId",
        to = "super::connection_nodes::Column::Id"
    )]
    ConnectionNodes,
}

impl Related<super::connection_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectionNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
