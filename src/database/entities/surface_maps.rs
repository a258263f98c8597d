use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Distributes a surface's runoff over connection nodes. The surface side
/// is a `(surface_type, surface_id)` pair over the two surface tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "surface_maps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// See [`SurfaceKind`]
    pub surface_type: Option<String>,
    pub surface_id: Option<i32>,
    pub connection_node_id: i32,
    pub percentage: Option<f64>,
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

/// Which surface table a map row points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Surface,
    ImperviousSurface,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::ImperviousSurface => "impervious_surface",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "surface" => Ok(Self::Surface),
            "impervious_surface" => Ok(Self::ImperviousSurface),
            other => Err(ValidationError::OutOfDomain {
                field: "surface_type",
                value: other.to_string(),
            }),
        }
    }
}

impl From<SurfaceKind> for String {
    fn from(kind: SurfaceKind) -> Self {
        kind.as_str().to_string()
    }
}
