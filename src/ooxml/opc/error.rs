/// Error types for relationship part operations
use crate::ooxml::opc::reltype::RelationshipType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Relationship type not recognized: {0}")]
    UnrecognizedType(RelationshipType),

    #[error("Relationship id not found: {0}")]
    IdNotFound(String),

    #[error("Relationship with target does not exist: {0}")]
    TargetNotFound(String),

    #[error("No relationship of type {0}")]
    TypeNotFound(RelationshipType),

    #[error("Multiple relationships of type {0}")]
    AmbiguousType(RelationshipType),

    #[error("No relationship id left to allocate")]
    IdSpaceExhausted,

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("Node handle refers to a removed node")]
    StaleNode,

    #[error("XML parsing error: {0}")]
    XmlError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Quick-XML error: {0}")]
    QuickXmlError(#[from] quick_xml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("Attribute error: {0}")]
    AttrError(String),
}

impl From<quick_xml::events::attributes::AttrError> for OpcError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OpcError::AttrError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
