use crate::phase::Phase;

/// A number type that a [Phase] can be combined with.
///
/// Mixed operations first bring both operands to the common type
/// [PhaseScalar::Promoted] and then apply the ordinary operation there.
/// Complex types promote to themselves, real types to their complex form
/// and `bool` to `Complex<i64>`.
pub trait PhaseScalar: Copy {
    /// The common type of `Self` and [Phase].
    type Promoted;

    /// Converts `self` into the common type.
    fn promote(self) -> Self::Promoted;

    /// Converts a phase into the common type. This is always exact.
    fn promote_phase(p: Phase) -> Self::Promoted;
}
