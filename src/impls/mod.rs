//! Provided [`Wrappable`](crate::Wrappable) implementations and the
//! registration macros.
//!
//! Coverage:
//!
//! - primitives: the integer and float types, `bool`, `char`, `str`,
//!   `String`, `Cow<str>`,
//! - wrappers: `Option`, references and `Box`,
//! - collections: `Vec`, arrays, `VecDeque`, `BTreeSet`, `HashSet`,
//!   `HashMap`, `BTreeMap`,
//! - dates: `chrono::NaiveDateTime` and `chrono::DateTime`,
//! - function pointers: classified unrepresentable and dropped,
//! - `serde_json::Value` and `serde_json::Map`: structural passthrough, so
//!   converting an already-converted mapping reproduces it.
//!
//! User types register through [`impl_wrappable_struct!`],
//! [`impl_wrappable_enum!`] and [`impl_wrappable_raw_enum!`].
//!
//! [`impl_wrappable_struct!`]: crate::impl_wrappable_struct
//! [`impl_wrappable_enum!`]: crate::impl_wrappable_enum
//! [`impl_wrappable_raw_enum!`]: crate::impl_wrappable_raw_enum

mod collections;
mod functions;
mod json;
mod macros;
mod option;
mod primitives;
