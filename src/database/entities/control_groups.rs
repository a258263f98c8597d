use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Groups controls so a scenario can switch a whole set on at once
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::controls::Entity")]
    Controls,
    #[sea_orm(has_many = "super::global_settings::Entity")]
    GlobalSettings,
}

impl Related<super::controls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Controls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
