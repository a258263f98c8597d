use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Distributes an impervious surface's runoff over connection nodes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "impervious_surface_maps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub impervious_surface_id: i32,
    pub connection_node_id: i32,
    pub percentage: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::impervious_surfaces::Entity",
        from = "Column::ImperviousSurfaceId",
        to = "super::impervious_surfaces::Column::Id"
    )]
    ImperviousSurfaces,
    #[sea_orm(
        belongs_to = "super::connection_nodes::Entity",
        from = "Column::ConnectionNodeId",
        to = "super::connection_nodes::Column::Id"
    )]
    ConnectionNodes,
}

impl Related<super::impervious_surfaces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImperviousSurfaces.def()
    }
}

impl Related<super::connection_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectionNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
