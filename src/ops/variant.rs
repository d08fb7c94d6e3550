use crate::wrapping::Wrappable;

// -----------------------------------------------------------------------------
// Variant

/// One case of an enum without a raw backing value.
///
/// A case with no payload converts to its name as a string. A case with a
/// payload converts to a one-entry mapping `{case_name: converted_payload}`;
/// if the payload converts to absence, the case collapses to its name
/// string, the same shape as a no-payload case.
///
/// A case declared with more than one payload value exposes only the first
/// one here: the stable, documented policy for multi-payload cases. The
/// [`impl_wrappable_enum!`](crate::impl_wrappable_enum) macro generates
/// conforming implementations.
///
/// Enums backed by a raw value do not implement this trait; they classify as
/// [`WrapRef::Raw`](crate::WrapRef::Raw) instead (see
/// [`impl_wrappable_raw_enum!`](crate::impl_wrappable_raw_enum)).
pub trait Variant: Wrappable {
    /// Returns the name of the active case.
    fn variant_name(&self) -> &str;

    /// Returns the active case's first payload value, if it carries one.
    fn payload(&self) -> Option<&dyn Wrappable>;
}
