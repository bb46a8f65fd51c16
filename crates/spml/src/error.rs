//! Error types for the document-level pipeline.

use std::fmt;

use spml_codec::DecodeError;

/// Errors that can occur when loading, resolving, or assembling a channel.
#[derive(Debug)]
pub enum Error {
    /// The document is not well-formed XML.
    Xml(roxmltree::Error),
    /// Payload decoding failed.
    Decode(DecodeError),
    /// No `DataChannel` with the requested name exists in any group.
    ChannelNotFound(String),
    /// The channel references a `ReadMethod` that does not exist.
    ReadMethodNotFound {
        /// The channel whose read method is missing.
        channel: String,
        /// The referenced read-method name.
        read_method: String,
    },
    /// A `ReadAxis` names an `Axis` that does not exist.
    AxisNotFound(String),
    /// A uniform axis is missing `start`, `step`, or `size`, or the value
    /// does not parse.
    AxisDefinitionIncomplete {
        /// The axis element's name.
        axis: String,
        /// The missing or unparsable attribute.
        attribute: &'static str,
    },
    /// An axis-source channel itself requires axis resolution.
    AxisRecursionTooDeep {
        /// The axis being resolved.
        axis: String,
        /// The channel it references.
        channel: String,
    },
    /// An axis resolved to fewer than the two coordinates an extent needs.
    DegenerateAxis {
        /// The axis element's name.
        axis: String,
        /// Number of coordinates it resolved to.
        len: usize,
    },
    /// Fewer than the two axes an image channel requires were resolved.
    InsufficientAxes {
        /// Number of axes actually resolved.
        found: usize,
    },
    /// More axes than the two an image channel requires were resolved.
    DimensionMismatch {
        /// Required dimensionality.
        expected: usize,
        /// Resolved dimensionality.
        actual: usize,
    },
    /// An axis length unit outside the known table (m, mm, um, nm, pm).
    UnknownPhysicalUnit(String),
    /// The axis system declares more elements than the soft budget allows.
    ElementBudgetExceeded {
        /// Declared element count.
        requested: usize,
        /// The budget it exceeded.
        budget: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Xml(e) => write!(f, "malformed XML document: {e}"),
            Error::Decode(e) => write!(f, "payload decode error: {e}"),
            Error::ChannelNotFound(name) => write!(f, "data channel not found: {name:?}"),
            Error::ReadMethodNotFound { channel, read_method } => {
                write!(
                    f,
                    "read method {read_method:?} referenced by channel {channel:?} not found"
                )
            }
            Error::AxisNotFound(name) => write!(f, "axis not found: {name:?}"),
            Error::AxisDefinitionIncomplete { axis, attribute } => {
                write!(f, "axis {axis:?} has no usable {attribute} attribute")
            }
            Error::AxisRecursionTooDeep { axis, channel } => {
                write!(
                    f,
                    "axis {axis:?} references channel {channel:?}, which itself \
                     requires axis resolution"
                )
            }
            Error::DegenerateAxis { axis, len } => {
                write!(
                    f,
                    "axis {axis:?} has {len} coordinate(s), at least 2 required"
                )
            }
            Error::InsufficientAxes { found } => {
                write!(f, "image channel needs 2 axes, resolved {found}")
            }
            Error::DimensionMismatch { expected, actual } => {
                write!(f, "image channel needs {expected} axes, resolved {actual}")
            }
            Error::UnknownPhysicalUnit(unit) => {
                write!(f, "unknown physical length unit: {unit:?}")
            }
            Error::ElementBudgetExceeded { requested, budget } => {
                write!(
                    f,
                    "declared element count {requested} exceeds the budget of {budget}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Xml(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}
