use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown canonical field: {0}")]
    UnknownField(String),
    #[error("synonym must not be empty (field {field})")]
    EmptySynonym { field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
