use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::LeveeMaterial;

/// Levee line; breachable when a maximum breach depth is set
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "levees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub material: Option<LeveeMaterial>,
    /// In meter
    pub max_breach_depth: Option<f64>,
    /// Crest level in mMSL
    pub crest_level: Option<f64>,
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
