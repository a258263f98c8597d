use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Simple (constant-rate) infiltration settings
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "simple_infiltration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub infiltration_rate: f64,
    pub infiltration_rate_file: Option<String>,
    pub infiltration_surface_option: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub max_infiltration_capacity_file: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::global_settings::Entity")]
    GlobalSettings,
}

impl ActiveModelBehavior for ActiveModel {}
