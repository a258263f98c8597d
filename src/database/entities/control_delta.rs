use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delta control: acts when the measured variable moves more than
/// `measure_delta` within `measure_dt` seconds; reverts after
/// `action_time` seconds.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_delta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub measure_variable: Option<String>,
    pub measure_delta: Option<f64>,
    /// e.g. 120.0 (seconds)
    pub measure_dt: Option<f64>,
    pub action_type: Option<String>,
    /// e.g. (0.35,-9999.0)
    pub action_value: Option<String>,
    pub action_time: Option<f64>,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
