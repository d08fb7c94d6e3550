//! The conversion engine and the public entry points.
//!
//! [`Wrapper`] drives one conversion tree: it owns the threaded context, the
//! lazily-created [`DateFormat`] cache and the recursion depth counter. The
//! free functions ([`wrap`], [`wrap_many`], [`wrap_to_bytes`],
//! [`wrap_many_to_bytes`]) are the context-free convenience entry points;
//! each constructs a fresh `Wrapper`, so concurrent top-level conversions
//! never share state.

mod convert;

use std::any::Any;

use crate::date::DateFormat;
use crate::error::WrapError;
use crate::wrapping::{WrapRef, Wrappable};

// -----------------------------------------------------------------------------
// Output type

/// The produced mapping: string keys to JSON-compatible values.
///
/// Values are only strings, numbers, booleans, mappings or sequences
/// thereof, never `null` and never an unconverted composite. Absent values
/// are represented by the absence of their key.
pub type WrappedMap = serde_json::Map<String, serde_json::Value>;

/// Maximum recursion depth of one top-level conversion.
///
/// Exceeding it fails with [`WrapError::CyclicStructure`]. Legitimate data
/// rarely nests anywhere near this deep; a value graph that cycles back to
/// an ancestor always does.
pub const MAX_WRAP_DEPTH: usize = 128;

// -----------------------------------------------------------------------------
// Wrapper

/// The conversion engine for one or more top-level conversions.
///
/// A `Wrapper` threads an optional caller-supplied context (immutable,
/// retrievable from hooks via [`context`](Wrapper::context)) and a shared
/// [`DateFormat`] through every level of recursion. The format is created
/// lazily with the default pattern if the caller supplies none.
///
/// Construct one directly to pass a context or a date format; otherwise the
/// free functions ([`wrap`], [`wrap_many`], ...) construct a fresh `Wrapper`
/// per call.
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_struct, Wrapper};
///
/// struct Empty {}
/// impl_wrappable_struct!(Empty {});
///
/// let map = Wrapper::new().wrap(&Empty {}).unwrap();
/// assert!(map.is_empty());
/// ```
pub struct Wrapper<'a> {
    context: Option<&'a dyn Any>,
    date_format: Option<DateFormat>,
    depth: usize,
}

impl<'a> Wrapper<'a> {
    /// Creates an engine with no context and a lazily-defaulted date format.
    #[inline]
    pub const fn new() -> Self {
        Wrapper {
            context: None,
            date_format: None,
            depth: 0,
        }
    }

    /// Attaches a caller-supplied context, retrievable from hooks through
    /// [`context`](Wrapper::context) for the duration of the conversion.
    #[inline]
    pub fn with_context(mut self, context: &'a dyn Any) -> Self {
        self.context = Some(context);
        self
    }

    /// Supplies the date format up front instead of lazily defaulting it.
    #[inline]
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    /// Returns the caller-supplied context downcast to `T`.
    ///
    /// Returns `None` if no context was attached or it is not a `T`.
    #[inline]
    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.and_then(|context| context.downcast_ref())
    }

    /// Returns the shared date format, creating the default one on first
    /// use.
    #[inline]
    pub fn date_format(&mut self) -> &DateFormat {
        self.date_format.get_or_insert_with(DateFormat::default)
    }

    /// Converts a value into a [`WrappedMap`].
    ///
    /// Fails with [`WrapError::InvalidTopLevelValue`] if the value's
    /// (possibly hook-overridden) conversion does not yield a mapping. As
    /// the one top-level asymmetry, an enum case without payload, which
    /// converts to its name string in leaf position, yields an empty
    /// mapping here, matching the zero-field composite view of it.
    ///
    /// Hooks may call this on a nested value to embed another object's
    /// top-level mapping; such re-entrant frames count toward the ongoing
    /// conversion's recursion depth.
    pub fn wrap(&mut self, value: &dyn Wrappable) -> Result<WrappedMap, WrapError> {
        if let WrapRef::Variant(variant) = value.wrap_ref() {
            if variant.payload().is_none() {
                return Ok(WrappedMap::new());
            }
        }
        match self.wrap_value(value)? {
            Some(serde_json::Value::Object(map)) => Ok(map),
            _ => Err(WrapError::invalid_top_level(value)),
        }
    }

    /// Converts a sequence of values elementwise.
    ///
    /// The first failing element aborts the whole call; there are no partial
    /// results.
    pub fn wrap_many<T: Wrappable>(&mut self, values: &[T]) -> Result<Vec<WrappedMap>, WrapError> {
        let mut maps = Vec::with_capacity(values.len());
        for value in values {
            maps.push(self.wrap(value)?);
        }
        Ok(maps)
    }

    /// Converts a value and encodes the mapping to JSON bytes.
    ///
    /// Encoder errors surface verbatim as [`WrapError::Encode`].
    pub fn wrap_to_bytes(
        &mut self,
        value: &dyn Wrappable,
        options: EncodeOptions,
    ) -> Result<Vec<u8>, WrapError> {
        let map = self.wrap(value)?;
        let bytes = if options.pretty {
            serde_json::to_vec_pretty(&map)
        } else {
            serde_json::to_vec(&map)
        };
        bytes.map_err(WrapError::Encode)
    }

    /// Converts a sequence of values and encodes the mappings as one JSON
    /// array.
    pub fn wrap_many_to_bytes<T: Wrappable>(
        &mut self,
        values: &[T],
        options: EncodeOptions,
    ) -> Result<Vec<u8>, WrapError> {
        let maps = self.wrap_many(values)?;
        let bytes = if options.pretty {
            serde_json::to_vec_pretty(&maps)
        } else {
            serde_json::to_vec(&maps)
        };
        bytes.map_err(WrapError::Encode)
    }
}

// -----------------------------------------------------------------------------
// Encoding options

/// Formatting options handed to the byte encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Emit pretty-printed JSON instead of the compact form.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Compact output (the default).
    #[inline]
    pub const fn compact() -> Self {
        EncodeOptions { pretty: false }
    }

    /// Pretty-printed output.
    #[inline]
    pub const fn pretty() -> Self {
        EncodeOptions { pretty: true }
    }
}

// -----------------------------------------------------------------------------
// Free entry points

/// Converts a value into a [`WrappedMap`] with no context and the default
/// date format.
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_struct, wrap};
///
/// struct Totals {
///     count: u32,
///     label: String,
/// }
/// impl_wrappable_struct!(Totals { count, label });
///
/// let map = wrap(&Totals { count: 3, label: "ok".to_owned() }).unwrap();
/// assert_eq!(map["count"], 3);
/// assert_eq!(map["label"], "ok");
/// ```
#[inline]
pub fn wrap(value: &dyn Wrappable) -> Result<WrappedMap, WrapError> {
    Wrapper::new().wrap(value)
}

/// Converts a sequence of values elementwise; the first failure aborts the
/// whole call.
#[inline]
pub fn wrap_many<T: Wrappable>(values: &[T]) -> Result<Vec<WrappedMap>, WrapError> {
    Wrapper::new().wrap_many(values)
}

/// Converts a value and encodes the mapping to JSON bytes.
#[inline]
pub fn wrap_to_bytes(value: &dyn Wrappable, options: EncodeOptions) -> Result<Vec<u8>, WrapError> {
    Wrapper::new().wrap_to_bytes(value, options)
}

/// Converts a sequence of values and encodes the mappings as one JSON array.
#[inline]
pub fn wrap_many_to_bytes<T: Wrappable>(
    values: &[T],
    options: EncodeOptions,
) -> Result<Vec<u8>, WrapError> {
    Wrapper::new().wrap_many_to_bytes(values, options)
}
