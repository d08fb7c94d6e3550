use serde_json::Value;

use crate::date::WrappableDate;
use crate::ops::{Composite, KeyedMap, Sequence, Variant};

// -----------------------------------------------------------------------------
// Wrappable

/// The foundational trait for values that can be converted into a
/// JSON-compatible mapping tree.
///
/// Implementors report their runtime shape through [`wrap_ref`], returning
/// one variant of the closed [`WrapRef`] enumeration. The conversion engine
/// ([`Wrapper`]) drives everything off that single classification step, so a
/// type's entire integration surface is one method.
///
/// # Implementation
///
/// Provided implementations cover the primitives, `Option`, references,
/// `Box`, the standard collections, `chrono` date types, function pointers
/// and `serde_json` values (see [`crate::impls`]). For your own types, the
/// registration macros generate the impl together with the matching
/// shape trait:
///
/// - [`impl_wrappable_struct!`](crate::impl_wrappable_struct): composites
///   (structs with named fields, optionally with an ancestor composite),
/// - [`impl_wrappable_enum!`](crate::impl_wrappable_enum): enums converted
///   by case name and payload,
/// - [`impl_wrappable_raw_enum!`](crate::impl_wrappable_raw_enum): enums
///   converted to their raw backing value.
///
/// Manual implementations are a one-liner:
///
/// ```
/// use wrapmap::{WrapRef, Wrappable};
///
/// struct Celsius(f64);
///
/// impl Wrappable for Celsius {
///     fn wrap_ref(&self) -> WrapRef<'_> {
///         self.0.wrap_ref()
///     }
/// }
/// ```
///
/// [`wrap_ref`]: Wrappable::wrap_ref
/// [`Wrapper`]: crate::wrapper::Wrapper
pub trait Wrappable {
    /// Classifies this value, returning a borrowed view of its shape.
    fn wrap_ref(&self) -> WrapRef<'_>;

    /// The type path used in error diagnostics.
    #[inline]
    fn wrap_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<T: Wrappable + ?Sized> Wrappable for &T {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        (**self).wrap_ref()
    }

    #[inline]
    fn wrap_type_path(&self) -> &'static str {
        (**self).wrap_type_path()
    }
}

impl<T: Wrappable + ?Sized> Wrappable for Box<T> {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        (**self).wrap_ref()
    }

    #[inline]
    fn wrap_type_path(&self) -> &'static str {
        (**self).wrap_type_path()
    }
}

// -----------------------------------------------------------------------------
// WrapRef

/// A borrowed, classified view of a [`Wrappable`] value.
///
/// This is the closed set of shapes the conversion engine understands. Each
/// value reports exactly one variant; the engine recurses through the
/// variants that carry children and converts the leaves.
pub enum WrapRef<'a> {
    /// A bare primitive, passed through unchanged.
    Primitive(Primitive<'a>),
    /// A date-like value, converted to a formatted string.
    Date(&'a dyn WrappableDate),
    /// An optional wrapper: `Some` unwraps one level and reclassifies,
    /// `None` signals absence (the enclosing key or element is omitted).
    Optional(Option<&'a dyn Wrappable>),
    /// An ordered or unordered collection, converted to an array.
    Sequence(&'a dyn Sequence),
    /// A keyed collection, converted to a mapping.
    Map(&'a dyn KeyedMap),
    /// One case of an enum without a raw backing value.
    Variant(&'a dyn Variant),
    /// The raw backing value of a raw-value enum; no further recursion.
    Raw(Primitive<'a>),
    /// A composite with named fields, converted by field iteration unless a
    /// hook replaces the whole conversion.
    Composite(&'a dyn Composite),
    /// A value with no JSON representation (function-shaped values); it is
    /// dropped wherever it appears.
    Unrepresentable,
}

/// Returns `true` if `value` is an absent optional, looking through nested
/// optional wrappers.
///
/// Absent fields are skipped before any customization hook runs, and absent
/// collection elements are dropped. Absence is never an error.
///
/// # Examples
///
/// ```
/// use wrapmap::is_absent;
///
/// assert!(is_absent(&None::<i32>));
/// assert!(is_absent(&Some(None::<i32>)));
/// assert!(!is_absent(&Some(3)));
/// assert!(!is_absent(&3));
/// ```
pub fn is_absent(value: &dyn Wrappable) -> bool {
    match value.wrap_ref() {
        WrapRef::Optional(None) => true,
        WrapRef::Optional(Some(inner)) => is_absent(inner),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Primitive

/// A leaf value with a direct JSON representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Primitive<'_> {
    /// Converts into a JSON value.
    ///
    /// Returns `None` for a non-finite float, which has no JSON number
    /// representation and is treated as absent.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Primitive::Bool(value) => Some(Value::Bool(value)),
            Primitive::Int(value) => Some(Value::Number(value.into())),
            Primitive::Uint(value) => Some(Value::Number(value.into())),
            Primitive::Float(value) => serde_json::Number::from_f64(value).map(Value::Number),
            Primitive::Char(value) => Some(Value::String(value.to_string())),
            Primitive::Str(value) => Some(Value::String(value.to_owned())),
        }
    }
}

impl From<bool> for Primitive<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<i64> for Primitive<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        Primitive::Int(value)
    }
}

impl From<f64> for Primitive<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Primitive::Float(value)
    }
}

impl From<char> for Primitive<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Primitive::Char(value)
    }
}

impl<'a> From<&'a str> for Primitive<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Primitive::Str(value)
    }
}
