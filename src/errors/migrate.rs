use sea_orm::DbErr;
use thiserror::Error;

use super::GeometryError;

/// Errors raised while copying a legacy model into the new schema.
///
/// Every variant aborts the whole run; the write transaction is rolled back
/// and zero rows remain in the target.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// The source table lacks a column the target schema requires
    #[error("Schema mismatch: source table has no column '{column}' required by the target schema")]
    MissingColumn { column: String },

    /// A source row carries no value for a required target column
    #[error("Schema mismatch: source row {row} carries no value for required column '{column}'")]
    SchemaMismatch { row: i64, column: String },

    /// A geometry value could not be converted to portable EWKT text
    #[error("Geometry conversion failed in row {row}, column '{column}': {source}")]
    GeometryConversion {
        row: i64,
        column: String,
        #[source]
        source: GeometryError,
    },

    /// The projected row does not decode into the target model
    #[error("Row {row} does not fit the target schema: {source}")]
    RowDecode {
        row: i64,
        #[source]
        source: serde_json::Error,
    },

    /// The all-or-nothing write transaction failed
    #[error("Transaction failed: {0}")]
    Transaction(#[source] DbErr),

    /// Reading the source or initializing the target schema failed
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}
