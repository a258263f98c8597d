use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Output aggregation: which variable, how, and on what timestep.
/// A row without `global_settings_id` applies to every scenario.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aggregation_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub global_settings_id: Option<i32>,
    /// Output variable name (input name when no flow variable is set)
    pub var_name: String,
    pub flow_variable: Option<String>,
    /// See [`AggregationMethod`]
    pub aggregation_method: String,
    pub aggregation_in_space: bool,
    /// Output timestep in seconds
    pub timestep: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::global_settings::Entity",
        from = "Column::GlobalSettingsId",
        to = "super::global_settings::Column::Id"
    )]
    GlobalSettings,
}

impl Related<super::global_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GlobalSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationMethod {
    Average,
    Minimum,
    Maximum,
    Cumulative,
    Median,
    CumulativeNegative,
    CumulativePositive,
    DurationPositive,
    DurationNegative,
}

impl AggregationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::Minimum => "min",
            Self::Maximum => "max",
            Self::Cumulative => "cum",
            Self::Median => "med",
            Self::CumulativeNegative => "cum_negative",
            Self::CumulativePositive => "cum_positive",
            Self::DurationPositive => "duration_positive",
            Self::DurationNegative => "duration_negative",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "avg" => Ok(Self::Average),
            "min" => Ok(Self::Minimum),
            "max" => Ok(Self::Maximum),
            "cum" => Ok(Self::Cumulative),
            "med" => Ok(Self::Median),
            "cum_negative" => Ok(Self::CumulativeNegative),
            "cum_positive" => Ok(Self::CumulativePositive),
            "duration_positive" => Ok(Self::DurationPositive),
            "duration_negative" => Ok(Self::DurationNegative),
            other => Err(ValidationError::OutOfDomain {
                field: "aggregation_method",
                value: other.to_string(),
            }),
        }
    }
}

impl From<AggregationMethod> for String {
    fn from(method: AggregationMethod) -> Self {
        method.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_strings_roundtrip() {
        for method in [
            AggregationMethod::Average,
            AggregationMethod::Minimum,
            AggregationMethod::Maximum,
            AggregationMethod::Cumulative,
            AggregationMethod::Median,
            AggregationMethod::CumulativeNegative,
            AggregationMethod::CumulativePositive,
            AggregationMethod::DurationPositive,
            AggregationMethod::DurationNegative,
        ] {
            assert_eq!(AggregationMethod::parse(method.as_str()).unwrap(), method);
        }
        assert!(AggregationMethod::parse("mean").is_err());
    }
}
