use crate::equation::Method;

/// How aggressive the generic solver's current iteration formula is.
///
/// Higher greed assumes a smoother, better-behaved function near the
/// iterate: it converges faster but fails more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Greed {
    Lowest,
    Medium,
    High,
    Highest,
}

/// The two operating phases of the generic solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Formulas applied directly at the running iterate.
    Open,

    /// Formulas seeded from the midpoint of a known bracket.
    Bracketed,
}

impl Greed {
    /// Returns the iteration formula used at this greed level.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Greed::Lowest => Method::Bisection,
            Greed::Medium => Method::Newton,
            Greed::High => Method::Secant,
            Greed::Highest => Method::Halley,
        }
    }

    /// Returns the next level up after a successful step, saturating at `Highest`.
    #[must_use]
    pub fn raised(self) -> Self {
        match self {
            Greed::Lowest => Greed::Medium,
            Greed::Medium => Greed::High,
            Greed::High | Greed::Highest => Greed::Highest,
        }
    }

    /// Returns the next level down after a failed step.
    ///
    /// Returns `None` if `self` is already at or below the phase floor, in
    /// which case the phase has no formula left to try.
    #[must_use]
    pub fn lowered(self, phase: Phase) -> Option<Self> {
        if self <= phase.floor() {
            return None;
        }
        Some(match self {
            Greed::Lowest | Greed::Medium => Greed::Lowest,
            Greed::High => Greed::Medium,
            Greed::Highest => Greed::High,
        })
    }
}

impl Phase {
    /// Returns the lowest greed usable in this phase.
    ///
    /// Bisection needs a bracket, so the open phase bottoms out at Newton.
    #[must_use]
    pub fn floor(self) -> Greed {
        match self {
            Phase::Open => Greed::Medium,
            Phase::Bracketed => Greed::Lowest,
        }
    }
}
