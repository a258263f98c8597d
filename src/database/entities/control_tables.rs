use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Table control: threshold/action-value pairs against a measured variable.
///
/// `action_table` holds comma-separated `threshold, action_value` pairs,
/// e.g. `1.2, 4.5, 2.3, 5.6` is the two pairs (1.2, 4.5) and (2.3, 5.6).
/// Fields are nullable on purpose: a rule may be filled in over several
/// authoring steps.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "control_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// e.g. s1/vol
    pub measure_variable: Option<String>,
    /// See [`MeasureOperator`]
    pub measure_operator: Option<String>,
    /// e.g. set_crest_level, set_discharge_coefficients, set_capacity
    pub action_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub action_table: Option<String>,
    /// Names the structure table the rule acts on, e.g. pumpstation
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Comparison operator for evaluating the measured variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureOperator {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl MeasureOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        }
    }
}

impl FromStr for MeasureOperator {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ">" => Ok(Self::Greater),
            "<" => Ok(Self::Less),
            ">=" => Ok(Self::GreaterEqual),
            "<=" => Ok(Self::LessEqual),
            other => Err(ValidationError::OutOfDomain {
                field: "measure_operator",
                value: other.to_string(),
            }),
        }
    }
}

impl From<MeasureOperator> for String {
    fn from(op: MeasureOperator) -> Self {
        op.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_roundtrip() {
        for op in [
            MeasureOperator::Greater,
            MeasureOperator::Less,
            MeasureOperator::GreaterEqual,
            MeasureOperator::LessEqual,
        ] {
            assert_eq!(op.as_str().parse::<MeasureOperator>().unwrap(), op);
        }
        assert!("==".parse::<MeasureOperator>().is_err());
    }
}
