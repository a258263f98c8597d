use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lateral inflow timeseries on a connection node
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "laterals_1d")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub connection_node_id: i32,
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
