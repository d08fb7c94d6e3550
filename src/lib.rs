#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Modules

mod date;
mod error;
mod style;
mod wrapping;

pub mod impls;
pub mod ops;
pub mod wrapper;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use date::{DateFormat, WrappableDate};
pub use error::{BoxedError, WrapError};
pub use style::{KeyStyle, default_key_style, set_default_key_style};
pub use wrapping::{Primitive, WrapRef, Wrappable, is_absent};

pub use ops::{
    Composite, CompositeFieldIter, FieldWrap, KeyedMap, Sequence, Variant, WholeWrap,
    WrappableKey,
};
pub use wrapper::{
    EncodeOptions, MAX_WRAP_DEPTH, WrappedMap, Wrapper, wrap, wrap_many, wrap_many_to_bytes,
    wrap_to_bytes,
};
