//! The core classification seam: [`Wrappable`], [`WrapRef`] and [`Primitive`].
//!
//! Every convertible value exposes exactly one [`WrapRef`] variant through
//! [`Wrappable::wrap_ref`]. The engine in [`crate::wrapper`] matches on that
//! variant and never performs ad-hoc dynamic type tests anywhere else.

mod wrappable;

pub use wrappable::{Primitive, WrapRef, Wrappable, is_absent};
