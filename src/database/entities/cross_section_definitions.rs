use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::CrossSectionShape;

/// Shape profile of a conduit, shared by pipes, culverts, weirs and
/// orifices. Width and height hold space-separated number lists for the
/// tabulated shapes, hence text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cross_section_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shape: Option<CrossSectionShape>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cross_section_locations::Entity")]
    CrossSectionLocations,
    #[sea_orm(has_many = "super::pipes::Entity")]
    Pipes,
    #[sea_orm(has_many = "super::culverts::Entity")]
    Culverts,
    #[sea_orm(has_many = "super::weirs::Entity")]
    Weirs,
    #[sea_orm(has_many = "super::orifices::Entity")]
    Orifices,
}

impl Related<super::cross_section_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrossSectionLocations.def()
    }
}

impl Related<super::pipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pipes.def()
    }
}

impl Related<super::culverts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Culverts.def()
    }
}

impl Related<super::weirs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weirs.def()
    }
}

impl Related<super::orifices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orifices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
