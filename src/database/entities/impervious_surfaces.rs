use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::ZoomCategory;
use crate::errors::ValidationError;

/// Paved surface classified after the RIONED scheme
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "impervious_surfaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    /// See [`SurfaceClass`]
    pub surface_class: String,
    /// Future refinement: klinkers, asfalt, ...
    pub surface_sub_class: Option<String>,
    /// See [`SurfaceInclination`]
    pub surface_inclination: String,
    pub zoom_category: Option<ZoomCategory>,
    pub nr_of_inhabitants: Option<f64>,
    pub dry_weather_flow: Option<f64>,
    pub area: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub the_geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::impervious_surface_maps::Entity")]
    ImperviousSurfaceMaps,
}

impl Related<super::impervious_surface_maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImperviousSurfaceMaps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// RIONED surface class; codes are the Dutch terms themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceClass {
    GeslotenVerharding,
    OpenVerharding,
    Onverhard,
    HalfVerhard,
    Pand,
}

impl SurfaceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeslotenVerharding => "gesloten verharding",
            Self::OpenVerharding => "open verharding",
            Self::Onverhard => "onverhard",
            Self::HalfVerhard => "half verhard",
            Self::Pand => "pand",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "gesloten verharding" => Ok(Self::GeslotenVerharding),
            "open verharding" => Ok(Self::OpenVerharding),
            "onverhard" => Ok(Self::Onverhard),
            "half verhard" => Ok(Self::HalfVerhard),
            "pand" => Ok(Self::Pand),
            other => Err(ValidationError::OutOfDomain {
                field: "surface_class",
                value: other.to_string(),
            }),
        }
    }

    /// Buildings get different inflow behaviour than roads
    pub fn is_building(&self) -> bool {
        matches!(self, Self::Pand)
    }
}

impl From<SurfaceClass> for String {
    fn from(class: SurfaceClass) -> Self {
        class.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceInclination {
    Hellend,
    Vlak,
    Uitgestrekt,
}

impl SurfaceInclination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hellend => "hellend",
            Self::Vlak => "vlak",
            Self::Uitgestrekt => "uitgestrekt",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "hellend" => Ok(Self::Hellend),
            "vlak" => Ok(Self::Vlak),
            "uitgestrekt" => Ok(Self::Uitgestrekt),
            other => Err(ValidationError::OutOfDomain {
                field: "surface_inclination",
                value: other.to_string(),
            }),
        }
    }
}

impl From<SurfaceInclination> for String {
    fn from(inclination: SurfaceInclination) -> Self {
        inclination.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_strings_roundtrip() {
        for class in [
            SurfaceClass::GeslotenVerharding,
            SurfaceClass::OpenVerharding,
            SurfaceClass::Onverhard,
            SurfaceClass::HalfVerhard,
            SurfaceClass::Pand,
        ] {
            assert_eq!(SurfaceClass::parse(class.as_str()).unwrap(), class);
        }
        assert!(SurfaceClass::parse("verhard").is_err());
        assert!(SurfaceClass::Pand.is_building());
        assert!(!SurfaceClass::Onverhard.is_building());
    }

    #[test]
    fn inclination_strings_roundtrip() {
        for inclination in [
            SurfaceInclination::Hellend,
            SurfaceInclination::Vlak,
            SurfaceInclination::Uitgestrekt,
        ] {
            assert_eq!(
                SurfaceInclination::parse(inclination.as_str()).unwrap(),
                inclination
            );
        }
        assert!(SurfaceInclination::parse("steil").is_err());
    }
}
