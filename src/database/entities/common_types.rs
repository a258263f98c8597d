//! Closed code sets shared across entities.
//!
//! Each set is a `DeriveActiveEnum` over the integer codes the simulation
//! engine reads, with the human label per code. Codes and labels round-trip
//! exactly; a value outside the set cannot be constructed.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Decode an integer code, reporting the offending field on failure.
pub fn from_code<E>(field: &'static str, code: i32) -> Result<E, ValidationError>
where
    E: ActiveEnum<Value = i32>,
{
    E::try_from_value(&code).map_err(|_| ValidationError::OutOfDomain {
        field,
        value: code.to_string(),
    })
}

/// Friction formulation for conduits and cross-section locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum FrictionType {
    #[sea_orm(num_value = 1)]
    Chezy,
    #[sea_orm(num_value = 4)]
    Manning,
    #[sea_orm(num_value = 999)]
    Nikuradse,
}

impl FrictionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chezy => "chezy [m^(1/2)/s]",
            Self::Manning => "manning nm [s/m^(1/2)]",
            Self::Nikuradse => "nikuradse (White-Coolbrook) [mm]",
        }
    }
}

/// Minimum/maximum switch used by friction averaging and the numerical
/// limiter fields; one set, reused everywhere a 0/1 bound occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Extremum {
    #[sea_orm(num_value = 0)]
    Minimum,
    #[sea_orm(num_value = 1)]
    Maximum,
}

impl Extremum {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }
}

/// Pipe material
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Material {
    #[sea_orm(num_value = 0)]
    Concrete,
    #[sea_orm(num_value = 1)]
    Pvc,
    #[sea_orm(num_value = 2)]
    Stoneware,
    #[sea_orm(num_value = 3)]
    CastIron,
    #[sea_orm(num_value = 4)]
    Brickwork,
    #[sea_orm(num_value = 5)]
    Hpe,
    #[sea_orm(num_value = 6)]
    Hpde,
    #[sea_orm(num_value = 7)]
    SheetIron,
    #[sea_orm(num_value = 8)]
    Steel,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Concrete => "concrete",
            Self::Pvc => "pvc",
            Self::Stoneware => "stoneware",
            Self::CastIron => "cast-iron",
            Self::Brickwork => "brickwork",
            Self::Hpe => "hpe",
            Self::Hpde => "hpde",
            Self::SheetIron => "sheet-iron",
            Self::Steel => "steel",
        }
    }
}

/// Levee body material
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum LeveeMaterial {
    #[sea_orm(num_value = 1)]
    Sand,
    #[sea_orm(num_value = 2)]
    Clay,
}

impl LeveeMaterial {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sand => "zand",
            Self::Clay => "klei",
        }
    }
}

/// Cross-section profile shape. Code 5 (tabulated rectangle) is reserved
/// and not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CrossSectionShape {
    #[sea_orm(num_value = 1)]
    Rectangle,
    #[sea_orm(num_value = 2)]
    Circle,
    #[sea_orm(num_value = 3)]
    Egg,
    #[sea_orm(num_value = 4)]
    Yz,
    #[sea_orm(num_value = 6)]
    TabulatedTrapezium,
}

impl CrossSectionShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Egg => "egg",
            Self::Yz => "yz",
            Self::TabulatedTrapezium => "tabulated_trapezium",
        }
    }
}

/// Import-code to shape-code mapping for culverts, carried verbatim from the
/// source data. The round and rectangular codes really are swapped here; the
/// consuming engine reads them that way.
pub const CULVERT_SHAPE_IMPORT_MAP: [(i32, i32); 7] = [
    (1, 2),  // rond
    (2, 1),  // rechthoekig
    (3, 3),  // eivormig
    (4, 4),  // muil
    (5, 5),  // ellips
    (6, 6),  // heul
    (99, 2), // onbekend
];

pub fn culvert_shape_for_import(code: i32) -> Option<i32> {
    CULVERT_SHAPE_IMPORT_MAP
        .iter()
        .find(|(import, _)| *import == code)
        .map(|(_, shape)| *shape)
}

/// How a 1D object is coupled to the 2D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CalculationType {
    #[sea_orm(num_value = 0)]
    Embedded,
    #[sea_orm(num_value = 1)]
    Isolated,
    #[sea_orm(num_value = 2)]
    Connected,
}

impl CalculationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Isolated => "isolated",
            Self::Connected => "connected",
        }
    }
}

/// Sewerage function of a pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum SewerageType {
    #[sea_orm(num_value = 0)]
    Combined,
    #[sea_orm(num_value = 1)]
    Stormwater,
    #[sea_orm(num_value = 2)]
    Wastewater,
    #[sea_orm(num_value = 3)]
    Transport,
    #[sea_orm(num_value = 4)]
    Overflow,
    #[sea_orm(num_value = 5)]
    Sinker,
    #[sea_orm(num_value = 6)]
    Storage,
    #[sea_orm(num_value = 7)]
    StorageSettlingTank,
}

impl SewerageType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::Stormwater => "stormwater",
            Self::Wastewater => "wastewater",
            Self::Transport => "transport",
            Self::Overflow => "overflow",
            Self::Sinker => "sinker",
            Self::Storage => "storage",
            Self::StorageSettlingTank => "storage-settling-tank",
        }
    }
}

/// Display rank of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ZoomCategory {
    #[sea_orm(num_value = 1)]
    Zoom1,
    #[sea_orm(num_value = 2)]
    Zoom2,
    #[sea_orm(num_value = 3)]
    Zoom3,
    #[sea_orm(num_value = 4)]
    Zoom4,
    #[sea_orm(num_value = 5)]
    Zoom5,
}

impl ZoomCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zoom1 => "zoom 1",
            Self::Zoom2 => "zoom 2",
            Self::Zoom3 => "zoom 3",
            Self::Zoom4 => "zoom 4",
            Self::Zoom5 => "zoom 5",
        }
    }
}

/// What kind of structure a manhole stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ManholeIndicator {
    #[sea_orm(num_value = 0)]
    Manhole,
    #[sea_orm(num_value = 1)]
    Outlet,
    #[sea_orm(num_value = 2)]
    Pumpstation,
}

impl ManholeIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manhole => "manhole",
            Self::Outlet => "outlet",
            Self::Pumpstation => "pumpstation",
        }
    }
}

/// Prescribed variable on a 1D boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum BoundaryType {
    #[sea_orm(num_value = 1)]
    Waterlevel,
    #[sea_orm(num_value = 2)]
    Velocity,
    #[sea_orm(num_value = 3)]
    Discharge,
}

impl BoundaryType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waterlevel => "waterlevel",
            Self::Velocity => "velocity",
            Self::Discharge => "discharge",
        }
    }
}

/// Time integration scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum IntegrationMethod {
    #[sea_orm(num_value = 0)]
    EulerImplicit,
    #[sea_orm(num_value = 1)]
    CarlsonImplicit,
    #[sea_orm(num_value = 2)]
    SileckiExplicit,
}

impl IntegrationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EulerImplicit => "euler-implicit",
            Self::CarlsonImplicit => "carlson-implicit",
            Self::SileckiExplicit => "silecki-explicit",
        }
    }
}

/// Which 0D inflow model feeds the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Use0dInflow {
    #[sea_orm(num_value = 0)]
    NoInflow,
    #[sea_orm(num_value = 1)]
    ImperviousInflow,
    #[sea_orm(num_value = 2)]
    SurfaceInflow,
}

impl Use0dInflow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoInflow => "no_inflow",
            Self::ImperviousInflow => "impervious_inflow",
            Self::SurfaceInflow => "surface_inflow",
        }
    }
}

/// Pumpstation classification; a single class exists today
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum PumpClassification {
    #[sea_orm(num_value = 1)]
    Class1,
}

impl PumpClassification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Class1 => "class 1",
        }
    }
}

/// Which side of the pump the control levels apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum PumpType {
    #[sea_orm(num_value = 1)]
    SuctionSide,
    #[sea_orm(num_value = 2)]
    DeliverySide,
}

impl PumpType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuctionSide => "type suction side",
            Self::DeliverySide => "type delivery side",
        }
    }
}

/// Weir crest kind. Declared for the constants; the weir and orifice
/// `crest_type` columns stay unconstrained integers, as in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum WeirCrestKind {
    #[sea_orm(num_value = 1)]
    BroadCrested,
    #[sea_orm(num_value = 2)]
    SharpCrested,
}

impl WeirCrestKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BroadCrested => "broad crested",
            Self::SharpCrested => "sharp crested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    fn roundtrip<E>()
    where
        E: ActiveEnum<Value = i32> + Iterable + PartialEq + std::fmt::Debug + Copy,
    {
        for variant in E::iter() {
            let code = variant.to_value();
            assert_eq!(E::try_from_value(&code).unwrap(), variant);
        }
    }

    #[test]
    fn codes_roundtrip_for_every_set() {
        roundtrip::<FrictionType>();
        roundtrip::<Extremum>();
        roundtrip::<Material>();
        roundtrip::<LeveeMaterial>();
        roundtrip::<CrossSectionShape>();
        roundtrip::<CalculationType>();
        roundtrip::<SewerageType>();
        roundtrip::<ZoomCategory>();
        roundtrip::<ManholeIndicator>();
        roundtrip::<BoundaryType>();
        roundtrip::<IntegrationMethod>();
        roundtrip::<Use0dInflow>();
        roundtrip::<PumpClassification>();
        roundtrip::<PumpType>();
        roundtrip::<WeirCrestKind>();
    }

    #[test]
    fn friction_codes_match_the_engine() {
        assert_eq!(FrictionType::Chezy.to_value(), 1);
        assert_eq!(FrictionType::Manning.to_value(), 4);
        assert_eq!(FrictionType::Nikuradse.to_value(), 999);
        assert_eq!(FrictionType::Manning.label(), "manning nm [s/m^(1/2)]");
    }

    #[test]
    fn out_of_domain_codes_are_rejected() {
        let err = from_code::<FrictionType>("friction_type", 2).unwrap_err();
        assert_eq!(
            err,
            crate::errors::ValidationError::OutOfDomain {
                field: "friction_type",
                value: "2".to_string(),
            }
        );
        assert!(from_code::<CrossSectionShape>("shape", 5).is_err());
        assert!(from_code::<CalculationType>("calculation_type", 3).is_err());
    }

    #[test]
    fn culvert_import_mapping_swaps_round_and_rectangular() {
        assert_eq!(culvert_shape_for_import(1), Some(2));
        assert_eq!(culvert_shape_for_import(2), Some(1));
        assert_eq!(culvert_shape_for_import(99), Some(2));
        assert_eq!(culvert_shape_for_import(7), None);
    }
}
