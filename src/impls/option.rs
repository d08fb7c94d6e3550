use crate::wrapping::{WrapRef, Wrappable};

impl<T: Wrappable> Wrappable for Option<T> {
    #[inline]
    fn wrap_ref(&self) -> WrapRef<'_> {
        WrapRef::Optional(self.as_ref().map(|value| value as &dyn Wrappable))
    }
}
