//! End-to-end checks of the flat API against known roots and integrals.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_abs_diff_eq;
use numeth_solvers::{
    equation::{Config, Status, newton},
    simple,
};

const EPSILON: f64 = 1e-3;
const ITERATIONS: usize = 1000;

type Solver = fn(fn(f64) -> f64, f64, usize, f64) -> f64;

const SOLVERS: [(&str, Solver); 5] = [
    ("bisection", simple::solve_bisection),
    ("halley", simple::solve_halley),
    ("newton", simple::solve_newton),
    ("secant", simple::solve_secant),
    ("generic", simple::solve_generic),
];

fn square_plus_one(x: f64) -> f64 {
    x * x + 1.0
}

fn fourth_power_plus_one(x: f64) -> f64 {
    x.powi(4) + 1.0
}

#[test]
fn every_returned_root_meets_epsilon() {
    let cases: [(&str, fn(f64) -> f64, f64); 5] = [
        ("sin", f64::sin, 3.0),
        ("sin", f64::sin, 6.1),
        ("cos", f64::cos, 1.5),
        ("cos", f64::cos, 0.0),
        ("sin", f64::sin, -0.05),
    ];

    for (name, f, x0) in cases {
        for (method, solve) in SOLVERS {
            let root = solve(f, x0, ITERATIONS, EPSILON);
            if !root.is_nan() {
                assert!(
                    f(root).abs() < EPSILON,
                    "{method} returned {root} for {name} from {x0}"
                );
            }
        }
    }
}

#[test]
fn rootless_functions_fail_gracefully() {
    for f in [square_plus_one as fn(f64) -> f64, fourth_power_plus_one] {
        for (method, solve) in SOLVERS {
            let root = solve(f, 1.0, ITERATIONS, EPSILON);
            assert!(root.is_nan(), "{method} returned {root} for a rootless function");
        }
    }
}

#[test]
fn generic_solver_handles_every_start() {
    for (f, x0) in [(f64::sin as fn(f64) -> f64, 3.0), (f64::cos, 0.0), (f64::sin, -0.05)] {
        let root = simple::solve_generic(f, x0, ITERATIONS, EPSILON);
        assert!(f(root).abs() < EPSILON, "generic failed from {x0}");
    }
}

#[test]
fn derivatives_of_sine() {
    assert!(simple::differentiate_central(f64::sin, FRAC_PI_2, 1e-3).abs() < 1e-12);
    assert_abs_diff_eq!(simple::differentiate_forward(f64::sin, PI, 1e-3), -1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(simple::differentiate_backward(f64::sin, 0.0, 1e-3), 1.0, epsilon = 1e-4);
}

#[test]
fn integrals_of_sine() {
    let (value, error) = simple::integrate_adaptive(f64::sin, 0.0, FRAC_PI_2, 1e-3, 1e-3);
    assert_abs_diff_eq!(value, 1.0, epsilon = 1e-3 + error);

    let (value, _) = simple::integrate_fixed(f64::sin, 0.0, PI, 1e-3, 1e-3);
    assert_abs_diff_eq!(value, 2.0, epsilon = 1e-4);
}

#[test]
fn fixed_solvers_find_the_expected_roots() {
    let (iterations, epsilon) = (100, 1e-4);

    let bisection = simple::solve_bisection(f64::sin, 3.0 * PI / 4.0, iterations, epsilon);
    let newton = simple::solve_newton(f64::sin, 5.0 * PI / 4.0, iterations, epsilon);
    let halley = simple::solve_halley(f64::sin, 7.0 * PI / 4.0, iterations, epsilon);
    let secant = simple::solve_secant(f64::sin, 9.0 * PI / 4.0, iterations, epsilon);

    assert_abs_diff_eq!(bisection, PI, epsilon = epsilon);
    assert_abs_diff_eq!(newton, PI, epsilon = epsilon);
    assert_abs_diff_eq!(halley, TAU, epsilon = epsilon);
    assert_abs_diff_eq!(secant, TAU, epsilon = epsilon);
}

#[test]
fn zero_iterations_means_the_default_budget() {
    let root = simple::solve_bisection(f64::sin, 3.0 * PI / 4.0, 0, 1e-12);
    assert!(root.sin().abs() < 1e-12);
}

#[test]
fn structured_api_reports_budget_exhaustion() {
    // Near π no double has a sine this small, so Newton cannot converge.
    let config = Config::new(3, 1e-300).expect("valid config");
    let solution = newton::solve_unobserved(f64::sin, 3.0, &config).expect("runs out of budget");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert!(solution.root().is_nan());
    assert!(solution.x.is_finite());
}

#[test]
fn largest_iteration_budget_is_accepted() {
    let bisection = simple::solve_bisection(f64::sin, 3.0 * PI / 4.0, usize::MAX, EPSILON);
    let generic = simple::solve_generic(f64::sin, 11.0 * PI / 4.0, usize::MAX, EPSILON);

    assert_abs_diff_eq!(bisection, PI, epsilon = EPSILON);
    assert!(generic.sin().abs() < EPSILON);
}
