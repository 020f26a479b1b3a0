use super::{Greed, Phase};

/// Events emitted by the generic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A residual was tested at `x` using the formula for `greed`.
    Stepped {
        iter: usize,
        phase: Phase,
        greed: Greed,
        x: f64,
        residual: f64,
    },

    /// A formula failed and greed dropped one level.
    Downgraded {
        iter: usize,
        phase: Phase,
        from: Greed,
        to: Greed,
    },

    /// A formula succeeded and greed rose one level.
    Upgraded {
        iter: usize,
        phase: Phase,
        from: Greed,
        to: Greed,
    },

    /// Every open formula failed at `x`; the solver moves to the bracketed phase.
    OpenPhaseAbandoned { iter: usize, x: f64 },

    /// Bracket search succeeded.
    Bracketed { iter: usize, left: f64, right: f64 },
}

impl Event {
    /// Returns the iteration counter at which the event occurred.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Stepped { iter, .. }
            | Self::Downgraded { iter, .. }
            | Self::Upgraded { iter, .. }
            | Self::OpenPhaseAbandoned { iter, .. }
            | Self::Bracketed { iter, .. } => *iter,
        }
    }

    /// Returns the tested residual, or `NaN` for events without one.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Self::Stepped { residual, .. } => *residual,
            _ => f64::NAN,
        }
    }
}
