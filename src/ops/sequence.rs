use crate::wrapping::Wrappable;

// -----------------------------------------------------------------------------
// Sequence

/// An ordered or unordered collection of values.
///
/// Sequences convert to JSON arrays. Elements that convert to absence
/// (absent optionals, unrepresentable values) are dropped rather than
/// emitted as `null`.
///
/// Provided implementations cover `Vec`, arrays, `VecDeque`, `BTreeSet`
/// and `HashSet` (see [`crate::impls`]). Unordered collections
/// yield their elements in iteration order; the engine imposes no ordering
/// of its own.
pub trait Sequence: Wrappable {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns an iterator over the elements.
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Wrappable> + '_>;
}
