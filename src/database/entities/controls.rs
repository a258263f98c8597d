use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Connects one control rule to a measure group, inside a control group.
///
/// The rule itself lives in one of five tables and is addressed by the
/// `(control_type, control_id)` pair; `ControlService::resolve_rule` turns
/// that pair into a typed `ControlRule` and validates it on write.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "controls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub control_group_id: Option<i32>,
    /// See [`ControlType`]
    pub control_type: Option<String>,
    /// Primary key in the table `control_type` names
    pub control_id: Option<i32>,
    pub measure_group_id: Option<i32>,
    /// Measure frequency in seconds
    pub measure_frequency: Option<i32>,
    /// Optional ISO 8601 activity window; dates without years are allowed
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::control_groups::Entity",
        from = "Column::ControlGroupId",
        to = "super::control_groups::Column::Id"
    )]
    ControlGroups,
    #[sea_orm(
        belongs_to = "super::control_measure_groups::Entity",
        from = "Column::MeasureGroupId",
        to = "super::control_measure_groups::Column::Id"
    )]
    ControlMeasureGroups,
}

impl Related<super::control_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlGroups.def()
    }
}

impl Related<super::control_measure_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlMeasureGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Discriminator over the five control rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlType {
    Table,
    Pid,
    Delta,
    Memory,
    Timed,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Pid => "pid",
            Self::Delta => "delta",
            Self::Memory => "memory",
            Self::Timed => "timed",
        }
    }
}

impl FromStr for ControlType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "table" => Ok(Self::Table),
            "pid" => Ok(Self::Pid),
            "delta" => Ok(Self::Delta),
            "memory" => Ok(Self::Memory),
            "timed" => Ok(Self::Timed),
            other => Err(ValidationError::OutOfDomain {
                field: "control_type",
                value: other.to_string(),
            }),
        }
    }
}

impl From<ControlType> for String {
    fn from(control_type: ControlType) -> Self {
        control_type.as_str().to_string()
    }
}
