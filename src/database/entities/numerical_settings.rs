use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{Extremum, IntegrationMethod};

/// Advanced numerical settings; every threshold has an engine-side default
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "numerical_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cfl_strictness_factor_1d: Option<f64>,
    pub cfl_strictness_factor_2d: Option<f64>,
    /// Convergence of the conjugate gradient method, defaults to 1.0e-9
    pub convergence_cg: Option<f64>,
    pub convergence_eps: Option<f64>,
    /// Threshold for upwind direction, defaults to 1e-05
    pub flow_direction_threshold: Option<f64>,
    pub frict_shallow_water_correction: Option<Extremum>,
    pub general_numerical_threshold: Option<f64>,
    pub integration_method: Option<IntegrationMethod>,
    pub limiter_grad_1d: Option<Extremum>,
    pub limiter_grad_2d: Option<Extremum>,
    pub limiter_slope_crossectional_area_2d: Option<Extremum>,
    pub limiter_slope_friction_2d: Option<Extremum>,
    pub max_nonlin_iterations: Option<i32>,
    pub max_degree: i32,
    /// Minimum friction velocity, default 0.05 m/s
    pub minimum_friction_velocity: Option<f64>,
    /// Minimum surface area in m2, defaults to 1.0e-8
    pub minimum_surface_area: Option<f64>,
    pub precon_cg: Option<i32>,
    pub preissmann_slot: Option<f64>,
    /// Between 0 and 1
    pub pump_implicit_ratio: Option<f64>,
    /// Thin water layer definition in m, defaults to 0.1
    pub thin_water_layer_definition: Option<f64>,
    pub use_of_cg: i32,
    pub use_of_nested_newton: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::global_settings::Entity")]
    GlobalSettings,
}

impl Related<super::global_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GlobalSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
