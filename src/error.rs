use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown item type: {0}")]
    UnknownItemType(String),
}
