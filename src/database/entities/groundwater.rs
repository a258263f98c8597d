use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Groundwater layer settings. Each scalar has a `_file` twin for a raster
/// override and, where applicable, a `_type` flag for how to read it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groundwater")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub groundwater_impervious_layer_level: Option<f64>,
    pub groundwater_impervious_layer_level_file: Option<String>,
    pub groundwater_impervious_layer_level_type: Option<i32>,
    pub phreatic_storage_capacity: Option<f64>,
    pub phreatic_storage_capacity_file: Option<String>,
    pub phreatic_storage_capacity_type: Option<i32>,
    pub equilibrium_infiltration_rate: Option<f64>,
    pub equilibrium_infiltration_rate_file: Option<String>,
    pub equilibrium_infiltration_rate_type: Option<i32>,
    pub initial_infiltration_rate: Option<f64>,
    pub initial_infiltration_rate_file: Option<String>,
    pub initial_infiltration_rate_type: Option<i32>,
    pub infiltration_decay_period: Option<f64>,
    pub infiltration_decay_period_file: Option<String>,
    pub infiltration_decay_period_type: Option<i32>,
    pub groundwater_hydro_connectivity: Option<f64>,
    pub groundwater_hydro_connectivity_file: Option<String>,
    pub groundwater_hydro_connectivity_type: Option<i32>,
    pub display_name: Option<String>,
    pub leakage: Option<f64>,
    pub leakage_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::global_settings::Entity")]
    GlobalSettings,
}

impl ActiveModelBehavior for ActiveModel {}
