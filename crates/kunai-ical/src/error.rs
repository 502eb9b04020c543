use kunai_core::error::CoreError;
use thiserror::Error;

use crate::parse::ParseError;

/// Failures surfaced by the parse and serialize entry points.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Stream read failure: {0}")]
    StreamRead(#[from] std::io::Error),

    #[error("Property decode failure: {0}")]
    PropertyDecode(ParseError),

    #[error("Structural failure: {0}")]
    Structural(ParseError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

impl From<ParseError> for RfcError {
    fn from(err: ParseError) -> Self {
        if err.is_decode() {
            Self::PropertyDecode(err)
        } else {
            Self::Structural(err)
        }
    }
}

impl RfcError {
    /// Returns the positioned parse error, if this failure carries one.
    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::PropertyDecode(err) | Self::Structural(err) => Some(err),
            Self::StreamRead(_) | Self::CoreError(_) => None,
        }
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
