use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::wrapping::Wrappable;

/// A boxed underlying error propagated through a customization hook.
pub type BoxedError = Box<dyn Error + Send + Sync>;

// -----------------------------------------------------------------------------
// WrapError

/// An enumeration of all error outcomes of a top-level conversion.
///
/// Every variant is terminal for the enclosing top-level call: there is no
/// partial-mapping recovery, and a failure in any field propagates up
/// through every enclosing composite, collection and mapping frame.
/// Absence (an absent optional, an unrepresentable value) is not an error,
/// and a hook that merely declines to handle a field is the designed
/// fall-through path, not a failure.
#[derive(Debug)]
pub enum WrapError {
    /// The top-level value's conversion did not produce a mapping: a bare
    /// primitive, sequence, or other non-composite with no whole-object
    /// override yielding a mapping.
    InvalidTopLevelValue {
        /// Type path of the offending value.
        type_path: Cow<'static, str>,
    },
    /// A customization hook deliberately signaled failure, or an override
    /// for a field propagated an underlying error.
    WrappingFailed {
        /// Type path of the offending value.
        type_path: Cow<'static, str>,
        /// The offending field, when the failure came from a per-field hook.
        field: Option<Cow<'static, str>>,
        /// The propagated underlying error, if any.
        source: Option<BoxedError>,
    },
    /// Recursion exceeded [`MAX_WRAP_DEPTH`](crate::wrapper::MAX_WRAP_DEPTH),
    /// which indicates a cyclic value graph (or pathological nesting).
    CyclicStructure {
        /// Type path of the value at which the limit was hit.
        type_path: Cow<'static, str>,
        /// The depth at which conversion stopped.
        depth: usize,
    },
    /// The byte encoder failed; the underlying error is surfaced verbatim.
    Encode(serde_json::Error),
}

impl WrapError {
    /// A top-level value whose conversion is not a mapping.
    pub fn invalid_top_level(value: &dyn Wrappable) -> Self {
        WrapError::InvalidTopLevelValue {
            type_path: Cow::Borrowed(value.wrap_type_path()),
        }
    }

    /// A whole-object hook signaling failure for `value`.
    pub fn wrapping_failed(value: &dyn Wrappable) -> Self {
        WrapError::WrappingFailed {
            type_path: Cow::Borrowed(value.wrap_type_path()),
            field: None,
            source: None,
        }
    }

    /// A per-field hook signaling failure for `field` of `value`.
    pub fn failed_field(value: &dyn Wrappable, field: impl Into<Cow<'static, str>>) -> Self {
        WrapError::WrappingFailed {
            type_path: Cow::Borrowed(value.wrap_type_path()),
            field: Some(field.into()),
            source: None,
        }
    }

    /// Attaches a propagated underlying error to a `WrappingFailed` value.
    ///
    /// Has no effect on other variants.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        if let WrapError::WrappingFailed {
            source: slot @ None,
            ..
        } = &mut self
        {
            *slot = Some(source.into());
        }
        self
    }

    pub(crate) fn cyclic(value: &dyn Wrappable, depth: usize) -> Self {
        WrapError::CyclicStructure {
            type_path: Cow::Borrowed(value.wrap_type_path()),
            depth,
        }
    }
}

impl fmt::Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTopLevelValue { type_path } => {
                write!(
                    f,
                    "top-level value of type `{type_path}` does not convert to a mapping"
                )
            }
            Self::WrappingFailed {
                type_path,
                field: Some(field),
                ..
            } => {
                write!(f, "wrapping field `{field}` of `{type_path}` failed")
            }
            Self::WrappingFailed {
                type_path,
                field: None,
                ..
            } => {
                write!(f, "wrapping value of type `{type_path}` failed")
            }
            Self::CyclicStructure { type_path, depth } => {
                write!(
                    f,
                    "recursion limit reached at depth {depth} inside `{type_path}` (cyclic value graph?)"
                )
            }
            Self::Encode(err) => {
                write!(f, "encoding the produced mapping failed: {err}")
            }
        }
    }
}

impl Error for WrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WrappingFailed {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}
