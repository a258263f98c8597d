use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{Extremum, FrictionType, Use0dInflow};

/// One named simulation scenario: which physical processes run, the grid
/// and timestep configuration, and references to the detail settings
/// tables. A model database usually carries a handful of these.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "global_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub use_2d_flow: bool,
    pub use_1d_flow: bool,
    /// Used as a boolean; kept integer for parity with the source data
    pub use_2d_rain: i32,
    pub manhole_storage_area: Option<f64>,
    #[sea_orm(unique)]
    pub name: Option<String>,
    pub sim_time_step: f64,
    pub minimum_sim_time_step: Option<f64>,
    pub maximum_sim_time_step: Option<f64>,
    pub nr_timesteps: i32,
    pub start_time: Option<ChronoDateTime>,
    pub start_date: ChronoDate,
    pub grid_space: f64,
    pub dist_calc_points: f64,
    /// Maximum quadtree refinement level
    pub kmax: i32,
    pub guess_dams: Option<i32>,
    pub table_step_size: f64,
    pub advection_1d: i32,
    pub advection_2d: i32,
    pub dem_file: Option<String>,
    /// Required if no DEM is given
    pub epsg_code: Option<i32>,
    pub frict_type: Option<FrictionType>,
    pub frict_coef: f64,
    pub frict_coef_file: Option<String>,
    pub frict_avg: Extremum,
    pub water_level_ini_type: Option<i32>,
    pub initial_waterlevel: f64,
    pub initial_waterlevel_file: Option<String>,
    pub initial_groundwater_level: Option<f64>,
    pub initial_groundwater_level_file: Option<String>,
    pub initial_groundwater_level_type: Option<i32>,
    pub interception_global: Option<f64>,
    pub interception_file: Option<String>,
    pub dem_obstacle_detection: bool,
    pub dem_obstacle_height: Option<f64>,
    pub embedded_cutoff_threshold: Option<f64>,
    pub use_0d_inflow: Use0dInflow,
    pub control_group_id: Option<i32>,
    pub flooding_threshold: f64,
    pub timestep_plus: bool,
    /// Degrees, 90 or less
    pub max_angle_1d_advection: Option<f64>,
    pub output_time_step: Option<f64>,
    pub wind_shielding_file: Option<String>,
    pub table_step_size_1d: Option<f64>,
    pub table_step_size_volume_2d: Option<f64>,
    pub numerical_settings_id: i32,
    pub groundwater_settings_id: Option<i32>,
    pub simple_infiltration_settings_id: Option<i32>,
    pub interflow_settings_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::numerical_settings::Entity",
        from = "Column::NumericalSettingsId",
        to = "super::numerical_settings::Column::Id"
    )]
    NumericalSettings,
    #[sea_orm(
        belongs_to = "super::groundwater::Entity",
        from = "Column::GroundwaterSettingsId",
        to = "super::groundwater::Column::Id"
    )]
    Groundwater,
    #[sea_orm(
        belongs_to = "super::simple_infiltration::Entity",
        from = "Column::SimpleInfiltrationSettingsId",
        to = "super::simple_infiltration::Column::Id"
    )]
    SimpleInfiltration,
    #[sea_orm(
        belongs_to = "super::interflow::Entity",
        from = "Column::InterflowSettingsId",
        to = "super::interflow::Column::Id"
    )]
    Interflow,
    #[sea_orm(
        belongs_to = "super::control_groups::Entity",
        from = "Column::ControlGroupId",
        to = "super::control_groups::Column::Id"
    )]
    ControlGroups,
    #[sea_orm(has_many = "super::aggregation_settings::Entity")]
    AggregationSettings,
}

impl Related<super::numerical_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NumericalSettings.def()
    }
}

impl Related<super::control_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlGroups.def()
    }
}

impl Related<super::groundwater::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groundwater.def()
    }
}

impl Related<super::simple_infiltration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SimpleInfiltration.def()
    }
}

impl Related<super::interflow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interflow.def()
    }
}

impl Related<super::aggregation_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AggregationSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
