use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::{CalculationType, ManholeIndicator, ZoomCategory};
use crate::errors::ValidationError;

/// Manhole on top of a connection node; exactly one per node
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manholes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String,
    pub code: String,
    #[sea_orm(unique)]
    pub connection_node_id: i32,
    /// Pit shape code, see [`ManholeShape`]
    pub shape: Option<String>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub manhole_indicator: Option<ManholeIndicator>,
    pub calculation_type: Option<CalculationType>,
    /// Elevation of the manhole floor
    pub bottom_level: Option<f64>,
    pub surface_level: Option<f64>,
    /// Level at which drainage starts (kolkhoogte)
    pub drain_level: Option<f64>,
    /// Thickness of the sediment layer
    pub sediment_level: Option<f64>,
    pub zoom_category: Option<ZoomCategory>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::connection_nodes::Entity",
        from = "Column::ConnectionNodeId",
        to = "super::connection_nodes::Column::Id"
    )]
    ConnectionNodes,
}

impl Related<super::connection_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectionNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Pit shape, keyed by the two-digit import codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManholeShape {
    Square,
    Round,
    Rectangle,
}

impl ManholeShape {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Square => "00",
            Self::Round => "01",
            Self::Rectangle => "02",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Square => "vierkant",
            Self::Round => "rond",
            Self::Rectangle => "rechthoekig",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "00" => Ok(Self::Square),
            "01" => Ok(Self::Round),
            "02" => Ok(Self::Rectangle),
            other => Err(ValidationError::OutOfDomain {
                field: "shape",
                value: other.to_string(),
            }),
        }
    }
}

impl From<ManholeShape> for String {
    fn from(shape: ManholeShape) -> Self {
        shape.as_code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_codes_roundtrip() {
        for shape in [
            ManholeShape::Square,
            ManholeShape::Round,
            ManholeShape::Rectangle,
        ] {
            assert_eq!(ManholeShape::from_code(shape.as_code()).unwrap(), shape);
        }
        assert!(ManholeShape::from_code("03").is_err());
    }
}
