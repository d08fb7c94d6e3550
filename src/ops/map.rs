use crate::wrapping::Wrappable;

// -----------------------------------------------------------------------------
// KeyedMap

/// A keyed collection of values, converted to a JSON mapping.
///
/// Output keys are derived from the source keys through [`WrappableKey`]:
/// string keys pass through, other key types supply their own string form,
/// and a key that yields `None` drops its entire entry. Values convert
/// recursively; a value that converts to absence drops its entry as well.
///
/// Provided implementations cover `HashMap`, `BTreeMap` and
/// `serde_json::Map` (see [`crate::impls`]).
pub trait KeyedMap: Wrappable {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the `(key, value)` entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn WrappableKey, &dyn Wrappable)> + '_>;
}

// -----------------------------------------------------------------------------
// WrappableKey

/// A capability for types used as mapping keys.
///
/// A key type converts itself to the output key string. Returning `None`
/// drops the key's entry from the produced mapping, the counterpart of a
/// key type with no natural string description.
///
/// Provided implementations cover `str`, `String`, `char`, `bool` and the
/// integer types, each using its natural string form.
///
/// # Examples
///
/// ```
/// use wrapmap::WrappableKey;
///
/// struct UserId(u64);
///
/// impl WrappableKey for UserId {
///     fn wrap_key(&self) -> Option<String> {
///         Some(format!("user-{}", self.0))
///     }
/// }
///
/// assert_eq!(UserId(7).wrap_key().as_deref(), Some("user-7"));
/// ```
pub trait WrappableKey {
    /// Returns the output key string for this key, or `None` to drop the
    /// entry.
    fn wrap_key(&self) -> Option<String>;
}

impl<K: WrappableKey + ?Sized> WrappableKey for &K {
    #[inline]
    fn wrap_key(&self) -> Option<String> {
        (**self).wrap_key()
    }
}

impl WrappableKey for str {
    #[inline]
    fn wrap_key(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl WrappableKey for String {
    #[inline]
    fn wrap_key(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl WrappableKey for char {
    #[inline]
    fn wrap_key(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl WrappableKey for bool {
    #[inline]
    fn wrap_key(&self) -> Option<String> {
        Some(self.to_string())
    }
}

macro_rules! impl_wrappable_key_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WrappableKey for $ty {
                #[inline]
                fn wrap_key(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_wrappable_key_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
