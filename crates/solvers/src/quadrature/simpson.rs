//! Adaptive Simpson quadrature.
//!
//! Each segment carries its endpoint and midpoint values along with its
//! coarse Simpson estimate `S`. Refining a segment evaluates only the two
//! new quarter points, giving the half-segment estimates `S_left` and
//! `S_right`. With `S2 = S_left + S_right`, the Richardson estimate
//! `err = (S2 - S) / 15` both corrects the result and decides acceptance:
//!
//! - accept when `|err| <= abs_tol`, `|err| <= rel_tol·|S|` and
//!   `|err| <= rel_tol·|S2|`, contributing `S2 + err` with error `|err|`;
//! - otherwise refine both halves, each with half the absolute tolerance and
//!   the same relative tolerance.
//!
//! Segments are processed from an explicit worklist, so subdivision depth is
//! limited only by [`Config::max_depth`] and floating-point spacing.

use numeth_core::Function;

use crate::Estimate;

use super::{Config, Error, check_bounds};

/// A segment awaiting refinement.
#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
    fc: f64,
    whole: f64,
    abs_tol: f64,
    depth: usize,
}

impl Segment {
    fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }
}

/// The Simpson estimate over `[a, b]` from its endpoint and midpoint values.
fn simpson(a: f64, b: f64, fa: f64, fc: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fc + fb)
}

/// Integrates `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// The reported error is the sum of the accepted segments' `|err|`.
///
/// # Errors
///
/// Returns an error if a bound is not finite, if an estimate becomes
/// non-finite, or if a segment would exceed [`Config::max_depth`].
pub fn integrate<F: Function>(f: &F, a: f64, b: f64, config: &Config) -> Result<Estimate, Error> {
    check_bounds(a, b)?;

    #[allow(clippy::float_cmp)]
    if a == b {
        return Ok(Estimate::new(0.0, 0.0));
    }

    let rel_tol = config.rel_tol();
    let (fa, fb) = (f.call(a), f.call(b));
    let fc = f.call(0.5 * (a + b));

    let mut work = vec![Segment {
        a,
        b,
        fa,
        fb,
        fc,
        whole: simpson(a, b, fa, fc, fb),
        abs_tol: config.abs_tol(),
        depth: 0,
    }];
    let mut total = Estimate::new(0.0, 0.0);

    while let Some(segment) = work.pop() {
        let Segment { a, b, fa, fb, fc, .. } = segment;
        let c = segment.midpoint();
        let fd = f.call(0.5 * (a + c));
        let fe = f.call(0.5 * (c + b));

        let left = simpson(a, c, fa, fd, fc);
        let right = simpson(c, b, fc, fe, fb);
        let split = left + right;
        let err = (split - segment.whole) / 15.0;

        if !err.is_finite() {
            return Err(Error::NonFiniteIntegrand { a, b });
        }

        let err_mag = err.abs();
        if err_mag <= segment.abs_tol
            && err_mag <= rel_tol * segment.whole.abs()
            && err_mag <= rel_tol * split.abs()
        {
            total.value += split + err;
            total.error += err_mag;
            continue;
        }

        if config.max_depth().is_some_and(|max| segment.depth >= max) {
            return Err(Error::MaxDepth {
                depth: segment.depth,
                a,
                b,
            });
        }

        let abs_tol = 0.5 * segment.abs_tol;
        let depth = segment.depth + 1;

        // Right half first so segments are summed left to right.
        work.push(Segment {
            a: c,
            b,
            fa: fc,
            fb,
            fc: fe,
            whole: right,
            abs_tol,
            depth,
        });
        work.push(Segment {
            a,
            b: c,
            fa,
            fb: fc,
            fc: fd,
            whole: left,
            abs_tol,
            depth,
        });
    }

    Ok(total)
}
