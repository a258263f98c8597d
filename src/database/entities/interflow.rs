use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Interflow layer settings
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interflow")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Interflow type 0-4; 0 switches interflow off
    pub interflow_type: i32,
    pub porosity: Option<f64>,
    pub porosity_file: Option<String>,
    pub porosity_layer_thickness: Option<f64>,
    pub impervious_layer_elevation: Option<f64>,
    pub hydraulic_conductivity: Option<f64>,
    pub hydraulic_conductivity_file: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::global_settings::Entity")]
    GlobalSettings,
}

impl ActiveModelBehavior for ActiveModel {}
