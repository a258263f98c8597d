use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Timed control: start;end;value rows separated by `#`, e.g.
/// `--01-01;--04-04;0.2;1.0#--04-04;--08-09;0.4;0.5`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_timed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub action_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub action_table: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
