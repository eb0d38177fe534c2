//! Errors for the owl-nets library
use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug)]
pub enum Location {
    BytePosition(usize),
    Unknown,
}

impl From<usize> for Location {
    fn from(u: usize) -> Self {
        Location::BytePosition(u)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BytePosition(u) => write!(f, "Byte Position: {}", u),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Error for the owl-nets library.
///
/// Per-class decoding anomalies are never reported through this type;
/// they are absorbed into the run statistics. Errors here are either
/// caller setup mistakes or I/O and parse failures at the boundary.
#[derive(Debug, Error)]
pub enum OwlNetsError {
    /// An IO Error
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    /// An error found during the parsing of an underlying format
    #[error("Parsing Error: {0}")]
    ParserError(Box<dyn std::error::Error>, Location),

    /// Data has been given that we cannot make sense of
    #[error("Validity Error: {0} at {1}")]
    ValidityError(String, Location),

    /// The caller's setup is unusable: decoding cannot start
    #[error("Configuration Error: {0}")]
    ConfigurationError(String),
}

impl OwlNetsError {
    pub fn invalid_at<S: Into<String>, L: Into<Location>>(s: S, l: L) -> OwlNetsError {
        OwlNetsError::ValidityError(s.into(), l.into())
    }

    pub fn invalid<S: Into<String>>(s: S) -> OwlNetsError {
        OwlNetsError::ValidityError(s.into(), Location::Unknown)
    }

    pub fn configuration<S: Into<String>>(s: S) -> OwlNetsError {
        OwlNetsError::ConfigurationError(s.into())
    }
}

impl From<oxiri::IriParseError> for OwlNetsError {
    fn from(e: oxiri::IriParseError) -> Self {
        Self::ParserError(e.into(), Location::Unknown)
    }
}

impl From<rio_turtle::TurtleError> for OwlNetsError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        Self::ParserError(e.into(), Location::Unknown)
    }
}

impl From<rio_xml::RdfXmlError> for OwlNetsError {
    fn from(e: rio_xml::RdfXmlError) -> Self {
        Self::ParserError(e.into(), Location::Unknown)
    }
}
