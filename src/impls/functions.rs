use crate::wrapping::{WrapRef, Wrappable};

// Function-shaped values have no JSON representation: they classify as
// unrepresentable and are dropped wherever they appear. An explicit impl on
// the pointer types keeps this a shape check rather than a description
// heuristic.
macro_rules! impl_wrappable_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Wrappable for fn($($arg),*) -> R {
            #[inline]
            fn wrap_ref(&self) -> WrapRef<'_> {
                WrapRef::Unrepresentable
            }
        }
    };
}

impl_wrappable_fn!();
impl_wrappable_fn!(A1);
impl_wrappable_fn!(A1, A2);
impl_wrappable_fn!(A1, A2, A3);
impl_wrappable_fn!(A1, A2, A3, A4);
impl_wrappable_fn!(A1, A2, A3, A4, A5);
