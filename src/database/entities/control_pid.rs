use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// PID control: kp/ki/kd are the proportional, integral and derivative
/// gains. Upper/lower limits hold one value, or two separated by a
/// semicolon when the action type expects two.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_pid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub measure_variable: Option<String>,
    pub setpoint: Option<f64>,
    pub kp: Option<f64>,
    pub ki: Option<f64>,
    pub kd: Option<f64>,
    pub action_type: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
    pub target_upper_limit: Option<String>,
    pub target_lower_limit: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
