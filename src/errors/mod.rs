//! Domain-specific error types for hydromodel
//!
//! Each domain carries its own `thiserror` enum:
//!
//! - **ValidationError**: entity fields outside their declared code sets
//! - **GeometryError**: malformed EWKT/WKT geometry text
//! - **MigrateError**: legacy-to-new schema copy failures
//! - **ControlError**: control rule resolution and measure-group validation
//!
//! All migration errors are fatal for the run that raised them; there is no
//! retry or partial-commit recovery anywhere in this crate.

pub mod control;
pub mod geometry;
pub mod migrate;
pub mod validation;

pub use control::ControlError;
pub use geometry::GeometryError;
pub use migrate::MigrateError;
pub use validation::ValidationError;

/// Result type alias for migration operations
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Result type alias for control resolution
pub type ControlResult<T> = Result<T, ControlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_result_alias() {
        let result: MigrateResult<()> = Err(MigrateError::SchemaMismatch {
            row: 1,
            column: "the_geom".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_control_result_alias() {
        let result: ControlResult<()> = Err(ControlError::UnknownControlType("pidd".to_string()));
        assert!(result.is_err());
    }
}
