//! The classify-and-convert recursion and default field iteration.

use serde_json::Value;

use super::{MAX_WRAP_DEPTH, WrappedMap, Wrapper};
use crate::error::WrapError;
use crate::ops::{Composite, FieldWrap, WholeWrap};
use crate::wrapping::{WrapRef, Wrappable, is_absent};

impl Wrapper<'_> {
    /// Converts a single value, customization enabled.
    ///
    /// Returns `Ok(None)` when the value signals absence (an absent
    /// optional, an unrepresentable value, a non-finite float); the caller
    /// omits the enclosing key or element. This is the method hook
    /// implementations call to recurse into nested values.
    pub fn wrap_value(&mut self, value: &dyn Wrappable) -> Result<Option<Value>, WrapError> {
        if self.depth >= MAX_WRAP_DEPTH {
            return Err(WrapError::cyclic(value, self.depth));
        }
        self.depth += 1;
        let converted = self.wrap_classified(value);
        self.depth -= 1;
        converted
    }

    fn wrap_classified(&mut self, value: &dyn Wrappable) -> Result<Option<Value>, WrapError> {
        match value.wrap_ref() {
            WrapRef::Primitive(primitive) | WrapRef::Raw(primitive) => {
                Ok(primitive.into_value())
            }
            WrapRef::Date(date) => Ok(Some(Value::String(date.wrap_date(self.date_format())))),
            WrapRef::Optional(Some(inner)) => self.wrap_value(inner),
            WrapRef::Optional(None) => Ok(None),
            WrapRef::Sequence(sequence) => {
                let mut items = Vec::with_capacity(sequence.len());
                for element in sequence.elements() {
                    if let Some(converted) = self.wrap_value(element)? {
                        items.push(converted);
                    }
                }
                Ok(Some(Value::Array(items)))
            }
            WrapRef::Map(map) => {
                let mut object = WrappedMap::new();
                for (key, entry) in map.entries() {
                    let Some(key) = key.wrap_key() else {
                        continue;
                    };
                    if let Some(converted) = self.wrap_value(entry)? {
                        object.insert(key, converted);
                    }
                }
                Ok(Some(Value::Object(object)))
            }
            WrapRef::Variant(variant) => {
                let name = variant.variant_name();
                match variant.payload() {
                    None => Ok(Some(Value::String(name.to_owned()))),
                    Some(payload) => match self.wrap_value(payload)? {
                        Some(converted) => {
                            let mut object = WrappedMap::with_capacity(1);
                            object.insert(name.to_owned(), converted);
                            Ok(Some(Value::Object(object)))
                        }
                        // An absent payload collapses to the case name,
                        // the same shape as a no-payload case.
                        None => Ok(Some(Value::String(name.to_owned()))),
                    },
                }
            }
            WrapRef::Composite(composite) => match composite.wrap_whole(self)? {
                WholeWrap::Replaced(converted) => Ok(Some(converted)),
                WholeWrap::Default => Ok(Some(Value::Object(self.wrap_fields(composite)?))),
            },
            WrapRef::Unrepresentable => Ok(None),
        }
    }

    /// Default field iteration: converts a composite's fields into a
    /// mapping, bypassing its whole-object hook.
    ///
    /// This is the customization-disabled entry a [`Composite::wrap_whole`]
    /// override calls to fall back to (or extend) the default conversion of
    /// its own object without recursing into itself. Field-level hooks
    /// ([`key_for_field`], [`wrap_field`]) still apply, and every descent
    /// into a field value re-enables whole-object customization for the
    /// nested value.
    ///
    /// Fields are converted ancestor level first, so a derived field whose
    /// output key collides with an ancestor's overwrites it. A field whose
    /// value is absent (through nested optionals) is skipped before any hook
    /// runs and never appears as a key.
    ///
    /// [`key_for_field`]: Composite::key_for_field
    /// [`wrap_field`]: Composite::wrap_field
    pub fn wrap_fields(&mut self, composite: &dyn Composite) -> Result<WrappedMap, WrapError> {
        let mut chain = Vec::new();
        let mut current = Some(composite);
        while let Some(level) = current {
            chain.push(level);
            current = level.ancestor();
        }

        let mut map = WrappedMap::new();
        for level in chain.into_iter().rev() {
            for (name, field) in level.fields() {
                if is_absent(field) {
                    continue;
                }
                // Hooks resolve on the most-derived composite even for
                // fields enumerated from an ancestor level.
                let Some(key) = composite.key_for_field(name) else {
                    continue;
                };
                let converted = match composite.wrap_field(name, field, self)? {
                    FieldWrap::Handled(converted) => Some(converted),
                    FieldWrap::Skip => None,
                    FieldWrap::Default => self.wrap_value(field)?,
                };
                if let Some(converted) = converted {
                    map.insert(key.into_owned(), converted);
                }
            }
        }
        Ok(map)
    }
}
