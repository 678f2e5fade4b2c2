use thiserror::Error;

/// Errors that can occur when decoding VAST XML
#[derive(Error, Debug)]
pub enum VastError {
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid offset: {0}")]
    InvalidOffset(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, VastError>;
