use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
