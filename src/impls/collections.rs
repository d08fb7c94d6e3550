use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

use crate::ops::{KeyedMap, Sequence, WrappableKey};
use crate::wrapping::{WrapRef, Wrappable};

// -----------------------------------------------------------------------------
// Sequences

macro_rules! impl_wrappable_sequence {
    ($(($($generics:tt)*) $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Wrappable for $ty {
                #[inline]
                fn wrap_ref(&self) -> WrapRef<'_> {
                    WrapRef::Sequence(self)
                }
            }

            impl<$($generics)*> Sequence for $ty {
                #[inline]
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }

                #[inline]
                fn elements(&self) -> Box<dyn Iterator<Item = &dyn Wrappable> + '_> {
                    Box::new(self.iter().map(|element| element as &dyn Wrappable))
                }
            }
        )*
    };
}

impl_wrappable_sequence!(
    (T: Wrappable) Vec<T>,
    (T: Wrappable) VecDeque<T>,
    (T: Wrappable) BTreeSet<T>,
    (T: Wrappable, S: BuildHasher) HashSet<T, S>,
);

// Arrays implement `Sequence` directly: the unsized `[T]` cannot be made
// into a trait object, so there is no slice carrier to point at.
impl<T: Wrappable, const N: usize> Wrappable for [T; N] {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Sequence(self)
    }
}

impl<T: Wrappable, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Wrappable> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Wrappable))
    }
}

// -----------------------------------------------------------------------------
// Keyed maps

macro_rules! impl_wrappable_map {
    ($(($($generics:tt)*) $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Wrappable for $ty {
                #[inline]
                fn wrap_ref(&self) -> WrapRef<'_> {
                    WrapRef::Map(self)
                }
            }

            impl<$($generics)*> KeyedMap for $ty {
                #[inline]
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }

                #[inline]
                fn entries(
                    &self,
                ) -> Box<dyn Iterator<Item = (&dyn WrappableKey, &dyn Wrappable)> + '_> {
                    Box::new(
                        self.iter()
                            .map(|(key, value)| (key as &dyn WrappableKey, value as &dyn Wrappable)),
                    )
                }
            }
        )*
    };
}

impl_wrappable_map!(
    (K: WrappableKey, V: Wrappable) BTreeMap<K, V>,
    (K: WrappableKey, V: Wrappable, S: BuildHasher) HashMap<K, V, S>,
);
