use sea_orm::DbErr;
use thiserror::Error;

/// Control rule resolution and validation errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// `control_type` outside table/pid/delta/memory/timed
    #[error("Unknown control type '{0}'")]
    UnknownControlType(String),

    /// The control row lacks a field needed to resolve its rule
    #[error("Control {control} has no {field}")]
    Incomplete {
        control: i32,
        field: &'static str,
    },

    /// `(control_type, control_id)` points at a rule row that does not exist
    #[error("Control {control} references missing {control_type} rule {rule_id}")]
    DanglingRule {
        control: i32,
        control_type: String,
        rule_id: i32,
    },

    /// Measure-group weights must sum to 1.0
    #[error("Measure group {group} weights sum to {total}, expected 1.0")]
    UnbalancedWeights { group: i32, total: f64 },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}
