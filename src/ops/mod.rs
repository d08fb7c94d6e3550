//! Shape traits consumed by the conversion engine.
//!
//! Each trait corresponds to one recursing variant of
//! [`WrapRef`](crate::WrapRef):
//!
//! - [`Composite`]: named fields, an optional ancestor chain, and the
//!   customization hooks.
//! - [`Sequence`]: element iteration for list- and set-like collections.
//! - [`KeyedMap`]: entry iteration for map-like collections, with
//!   [`WrappableKey`] deriving output keys from non-string key types.
//! - [`Variant`]: case name and payload of an enum without a raw backing
//!   value.

// -----------------------------------------------------------------------------
// Modules

mod composite;
mod map;
mod sequence;
mod variant;

// -----------------------------------------------------------------------------
// Exports

pub use composite::{Composite, CompositeFieldIter, FieldWrap, WholeWrap};
pub use map::{KeyedMap, WrappableKey};
pub use sequence::Sequence;
pub use variant::Variant;
