use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::ZoomCategory;

/// Generic runoff surface
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "surfaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    pub zoom_category: Option<ZoomCategory>,
    pub nr_of_inhabitants: Option<f64>,
    /// Dry weather flow production
    pub dry_weather_flow: Option<f64>,
    pub function: Option<String>,
    pub area: Option<f64>,
    pub surface_parameters_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::surface_parameters::Entity",
        from = "Column::SurfaceParametersId",
        to = "super::surface_parameters::Column::Id"
    )]
    SurfaceParameters,
}

impl Related<super::surface_parameters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurfaceParameters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
