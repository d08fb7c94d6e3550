use serde_json::{Map, Value};

use crate::ops::{KeyedMap, WrappableKey};
use crate::wrapping::{Primitive, WrapRef, Wrappable};

// Already-converted JSON values pass through structurally: re-wrapping a
// produced mapping reproduces it.

impl Wrappable for Value {
    fn wrap_ref(&self) -> WrapRef<'_> {
        match self {
            Value::Null => WrapRef::Optional(None),
            Value::Bool(value) => WrapRef::Primitive(Primitive::Bool(*value)),
            Value::Number(number) => WrapRef::Primitive(if let Some(int) = number.as_i64() {
                Primitive::Int(int)
            } else if let Some(uint) = number.as_u64() {
                Primitive::Uint(uint)
            } else {
                Primitive::Float(number.as_f64().unwrap_or(f64::NAN))
            }),
            Value::String(value) => WrapRef::Primitive(Primitive::Str(value)),
            Value::Array(items) => WrapRef::Sequence(items),
            Value::Object(map) => WrapRef::Map(map),
        }
    }
}

impl Wrappable for Map<String, Value> {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Map(self)
    }
}

impl KeyedMap for Map<String, Value> {
    #[inline]
    fn len(&self) -> usize {
        Map::len(self)
    }

    #[inline]
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn WrappableKey, &dyn Wrappable)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn WrappableKey, value as &dyn Wrappable)),
        )
    }
}
