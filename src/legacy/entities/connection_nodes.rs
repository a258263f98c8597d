use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Legacy v2 connection node, as authored by the old tooling.
///
/// Carries two fields the new schema dropped: the provider code and the
/// auxiliary linestring geometry. Geometry is EWKT text here too; the
/// migration re-encodes it canonically rather than trusting it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "v2_connection_nodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub storage_area: Option<f64>,
    pub initial_waterlevel: Option<f64>,
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub the_geom: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom_linestring: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
