use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inflow parameters a surface must carry to compute its runoff
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "surface_parameters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Reaction factor (/min)
    pub outflow_delay: f64,
    /// Surface storage (mm)
    pub surface_layer_thickness: f64,
    pub infiltration: bool,
    /// Max infiltration capacity (fb) in mm/h
    pub max_infiltration_capacity: f64,
    /// Min infiltration capacity (fe) in mm/h
    pub min_infiltration_capacity: f64,
    /// Time factor reduction (ka) of infiltration capacity (/h)
    pub infiltration_decay_constant: f64,
    /// Time factor recovery (kh) of infiltration capacity (/h)
    pub infiltration_recovery_constant: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::surfaces::Entity")]
    Surfaces,
}

impl Related<super::surfaces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Surfaces.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
