use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A point in the 1D network where structures meet.
///
/// This is the one table the experimental schema pinned down first: no
/// provider code, no auxiliary linestring, geometry as EWKT text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "connection_nodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub storage_area: Option<f64>,
    pub initial_waterlevel: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub the_geom: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::manholes::Entity")]
    Manholes,
    #[sea_orm(has_many = "super::boundary_conditions_1d::Entity")]
    BoundaryConditions1d,
    #[sea_orm(has_many = "super::laterals_1d::Entity")]
    Laterals1d,
    #[sea_orm(has_many = "super::surface_maps::Entity")]
    SurfaceMaps,
    #[sea_orm(has_many = "super::impervious_surface_maps::Entity")]
    ImperviousSurfaceMaps,
}

impl Related<super::manholes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manholes.def()
    }
}

impl Related<super::boundary_conditions_1d::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoundaryConditions1d.def()
    }
}

impl Related<super::laterals_1d::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laterals1d.def()
    }
}

impl Related<super::surface_maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurfaceMaps.def()
    }
}

impl Related<super::impervious_surface_maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImperviousSurfaceMaps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
