use thiserror::Error;

/// Entity construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Value outside the field's declared code set
    #[error("Field '{field}' does not allow value '{value}'")]
    OutOfDomain { field: &'static str, value: String },

    /// Required field missing at construction
    #[error("Field '{field}' is required on {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}
