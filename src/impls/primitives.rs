use std::borrow::Cow;

use crate::wrapping::{Primitive, WrapRef, Wrappable};

macro_rules! impl_wrappable_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Wrappable for $ty {
                #[inline]
                fn wrap_ref(&self) -> WrapRef<'_> {
                    WrapRef::Primitive(Primitive::Int(*self as i64))
                }
            }
        )*
    };
}

macro_rules! impl_wrappable_uint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Wrappable for $ty {
                #[inline]
                fn wrap_ref(&self) -> WrapRef<'_> {
                    WrapRef::Primitive(Primitive::Uint(*self as u64))
                }
            }
        )*
    };
}

impl_wrappable_int!(i8, i16, i32, i64, isize);
impl_wrappable_uint!(u8, u16, u32, u64, usize);

impl Wrappable for f32 {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Float(f64::from(*self)))
    }
}

impl Wrappable for f64 {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Float(*self))
    }
}

impl Wrappable for bool {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Bool(*self))
    }
}

impl Wrappable for char {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Char(*self))
    }
}

impl Wrappable for str {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Str(self))
    }
}

impl Wrappable for String {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Str(self))
    }
}

impl Wrappable for Cow<'_, str> {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Primitive(Primitive::Str(self))
    }
}
