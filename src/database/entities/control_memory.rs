use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Memory control: switches at the upper threshold and back at the lower
/// one. `is_inverse` flips which threshold activates the target.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_memory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub measure_variable: Option<String>,
    pub upper_threshold: Option<f64>,
    pub lower_threshold: Option<f64>,
    pub action_type: Option<String>,
    pub action_value: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
    /// Initial state of the target
    pub is_active: bool,
    pub is_inverse: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
