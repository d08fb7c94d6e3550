use std::borrow::Cow;

use serde_json::Value;

use crate::error::WrapError;
use crate::style::KeyStyle;
use crate::wrapper::Wrapper;
use crate::wrapping::Wrappable;

// -----------------------------------------------------------------------------
// Composite

/// A structured value with zero or more named fields.
///
/// This is the injected field enumerator: the engine never reflects over a
/// type by itself, it asks the `Composite` implementation for ordered
/// `(name, value)` pairs through index-based access, and for the nearest
/// ancestor composite when the type models an inheritance chain. The
/// [`impl_wrappable_struct!`](crate::impl_wrappable_struct) macro generates
/// conforming implementations.
///
/// # Customization hooks
///
/// Four methods carry provided defaults; overriding any of them changes one
/// decision of the default conversion:
///
/// - [`key_style`]: the naming convention applied to field names by the
///   default [`key_for_field`]. The default reads the process-wide
///   configuration cell ([`default_key_style`](crate::default_key_style)).
/// - [`wrap_whole`]: replaces the conversion of the entire object. When it
///   returns [`WholeWrap::Replaced`], default field iteration never runs for
///   this object. An override that wants to extend rather than replace the
///   default output can call [`Wrapper::wrap_fields`] itself.
/// - [`key_for_field`]: replaces the output key of one field, or drops the
///   field by returning `None`. A key returned by an override is used
///   verbatim, with no key-style adjustment.
/// - [`wrap_field`]: replaces the converted value of one field. Returning
///   [`FieldWrap::Default`] declines and falls through to the default
///   recursive conversion; returning an error aborts the entire top-level
///   call.
///
/// Hooks are always resolved on the most-derived composite, including for
/// fields enumerated from an ancestor level.
///
/// # Examples
///
/// ```
/// use wrapmap::{impl_wrappable_struct, wrap};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_wrappable_struct!(Point { x, y });
///
/// let map = wrap(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(map["x"], 1);
/// assert_eq!(map["y"], 2);
/// ```
///
/// [`key_style`]: Composite::key_style
/// [`wrap_whole`]: Composite::wrap_whole
/// [`key_for_field`]: Composite::key_for_field
/// [`wrap_field`]: Composite::wrap_field
pub trait Composite: Wrappable {
    /// Returns the number of fields declared directly on this type, not
    /// counting ancestor levels.
    fn field_len(&self) -> usize;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Wrappable>;

    /// Returns the nearest ancestor composite, if this type models one level
    /// of an inheritance chain.
    ///
    /// The engine walks ancestors transitively and converts fields from the
    /// most-ancestral level first, so a derived field whose output key
    /// collides with an ancestor's overwrites it.
    #[inline]
    fn ancestor(&self) -> Option<&dyn Composite> {
        None
    }

    /// Hook: the key naming convention for this composite's fields.
    ///
    /// Consulted by the default [`key_for_field`](Composite::key_for_field).
    /// The provided default reads the process-wide default style.
    #[inline]
    fn key_style(&self) -> KeyStyle {
        crate::style::default_key_style()
    }

    /// Hook: replace the conversion of the whole object.
    ///
    /// The provided default declines, which routes the object through
    /// default field iteration. An override may produce any JSON value
    /// (the result replaces the object's contribution entirely) or signal
    /// unrecoverable failure by returning an error.
    #[inline]
    fn wrap_whole(&self, wrapper: &mut Wrapper<'_>) -> Result<WholeWrap, WrapError> {
        let _ = wrapper;
        Ok(WholeWrap::Default)
    }

    /// Hook: the output key for the field named `name`.
    ///
    /// Returning `None` drops the field. The provided default applies this
    /// composite's [`key_style`](Composite::key_style) to the field name.
    #[inline]
    fn key_for_field<'n>(&self, name: &'n str) -> Option<Cow<'n, str>> {
        Some(self.key_style().apply(name))
    }

    /// Hook: replace the converted value of the field named `name`.
    ///
    /// The provided default declines ([`FieldWrap::Default`]), falling
    /// through to recursive default conversion of `value`. An override may
    /// also return [`FieldWrap::Skip`] to emit nothing for the field while
    /// still counting as handled, or an error to abort the whole call.
    #[inline]
    fn wrap_field(
        &self,
        name: &str,
        value: &dyn Wrappable,
        wrapper: &mut Wrapper<'_>,
    ) -> Result<FieldWrap, WrapError> {
        let _ = (name, value, wrapper);
        Ok(FieldWrap::Default)
    }
}

impl<'a> dyn Composite + 'a {
    /// Returns an iterator over this level's `(name, value)` field pairs in
    /// declaration order. Ancestor fields are not included.
    #[inline]
    pub fn fields(&self) -> CompositeFieldIter<'_> {
        CompositeFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Hook results

/// The outcome of the whole-object hook [`Composite::wrap_whole`].
#[derive(Debug)]
pub enum WholeWrap {
    /// Use this value as the object's entire conversion result.
    Replaced(Value),
    /// Decline; run default field iteration.
    Default,
}

/// The outcome of the per-field hook [`Composite::wrap_field`].
#[derive(Debug)]
pub enum FieldWrap {
    /// Use this value for the field.
    Handled(Value),
    /// The hook handled the field but produced nothing; the key is omitted.
    Skip,
    /// Decline; convert the original field value recursively.
    Default,
}

// -----------------------------------------------------------------------------
// Composite Field Iterator

/// An iterator over the `(name, value)` field pairs of one composite level.
pub struct CompositeFieldIter<'a> {
    composite: &'a dyn Composite,
    index: usize,
}

impl<'a> CompositeFieldIter<'a> {
    /// Creates a new iterator for the given composite.
    #[inline(always)]
    pub const fn new(composite: &'a dyn Composite) -> Self {
        CompositeFieldIter {
            composite,
            index: 0,
        }
    }
}

impl<'a> Iterator for CompositeFieldIter<'a> {
    type Item = (&'a str, &'a dyn Wrappable);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.composite.name_at(self.index)?;
        let value = self.composite.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.composite.field_len();
        (size - self.index, Some(size))
    }
}

impl ExactSizeIterator for CompositeFieldIter<'_> {}
