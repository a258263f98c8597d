use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Flow obstacle line on the 2D grid
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "obstacles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Crest level in mMSL
    pub crest_level: Option<f64>,
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
