use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line along which the 2D grid refines to the given level
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grid_refinements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub refinement_level: Option<i32>,
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
