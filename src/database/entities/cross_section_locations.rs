use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::FrictionType;

/// Where along a channel a cross-section definition applies
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cross_section_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub channel_id: Option<i32>,
    pub definition_id: Option<i32>,
    pub reference_level: Option<f64>,
    pub friction_type: Option<FrictionType>,
    pub friction_value: Option<f64>,
    pub bank_level: Option<f64>,
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::channels::Entity",
        from = "Column::ChannelId",
        to = "super::channels::Column::Id"
    )]
    Channels,
    #[sea_orm(
        belongs_to = "super::cross_section_definitions::Entity",
        from = "Column::DefinitionId",
        to = "super::cross_section_definitions::Column::Id"
    )]
    CrossSectionDefinitions,
}

impl Related<super::channels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channels.def()
    }
}

impl Related<super::cross_section_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrossSectionDefinitions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
