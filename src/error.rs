use std::fmt::{self, Display};
use std::io;

use crate::model::JsonKind;

/// Errors surfaced by serialization.
#[derive(Debug)]
pub enum SteadyJsonError {
    /// A value outside the closed JSON variant set reached primitive
    /// formatting, or a conversion met a number the model cannot hold.
    UnsupportedValue(String),
    /// A computed hex digit fell outside 0..=15 while building a `\uXXXX`
    /// escape. This is a defect in the escaper, never a property of the
    /// input data.
    HexDigitOutOfRange(u32),
    /// The external sink failed during a write or flush. Propagated
    /// unchanged; the serializer does not retry.
    Sink(io::Error),
}

impl SteadyJsonError {
    pub(crate) fn not_primitive(kind: JsonKind) -> Self {
        SteadyJsonError::UnsupportedValue(format!("{} is not a JSON primitive", kind.name()))
    }
}

impl Display for SteadyJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteadyJsonError::UnsupportedValue(detail) => {
                write!(f, "unsupported JSON value: {}", detail)
            }
            SteadyJsonError::HexDigitOutOfRange(digit) => {
                write!(f, "hex digit out of range: {}", digit)
            }
            SteadyJsonError::Sink(err) => write!(f, "sink write failed: {}", err),
        }
    }
}

impl std::error::Error for SteadyJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SteadyJsonError::Sink(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SteadyJsonError {
    fn from(err: io::Error) -> Self {
        SteadyJsonError::Sink(err)
    }
}
