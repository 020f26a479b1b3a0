//! Non-adaptive Gauss-Kronrod quadrature.
//!
//! A single 15-point Kronrod pass over `[a, b]`. The embedded 7-point Gauss
//! rule reuses every Gauss node, so the error estimate `|K15 - G7|` costs no
//! extra evaluations.

use numeth_core::Function;

use crate::Estimate;

use super::{Config, Error, check_bounds};

/// Kronrod abscissae on `[0, 1]`, descending; odd indices are Gauss nodes.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.0,
];

/// Kronrod weights matching [`XGK`].
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

/// Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]` and the center.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// Integrates `f` over `[a, b]` with one G7/K15 pass.
///
/// [`Config::max_depth`] and [`Config::max_subdivisions`] are ignored; see
/// [`gauss_kronrod_adaptive`](super::gauss_kronrod_adaptive) for the
/// subdividing variant.
///
/// # Errors
///
/// Returns an error if a bound is not finite, if the result is not finite,
/// or with [`Error::ToleranceNotMet`] if the error estimate exceeds either
/// `abs_tol` or `rel_tol·|result|`.
pub fn integrate<F: Function>(f: &F, a: f64, b: f64, config: &Config) -> Result<Estimate, Error> {
    check_bounds(a, b)?;

    let estimate = pass(f, a, b);
    let Estimate { value, error } = estimate;
    if !value.is_finite() || !error.is_finite() {
        return Err(Error::NonFiniteIntegrand { a, b });
    }

    if !config.accepts(&estimate) {
        return Err(Error::ToleranceNotMet { estimate });
    }
    Ok(estimate)
}

/// One G7/K15 pass over `[a, b]`: the Kronrod value and `|K15 - G7|`.
///
/// The result may be non-finite; callers check.
pub(super) fn pass<F: Function>(f: &F, a: f64, b: f64) -> Estimate {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f.call(center);
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for (j, (&x, &w)) in XGK.iter().zip(&WGK).take(7).enumerate() {
        let dx = half * x;
        let pair = f.call(center - dx) + f.call(center + dx);
        kronrod += w * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Estimate::new(kronrod * half, ((kronrod - gauss) * half).abs())
}
