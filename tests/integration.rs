//! End-to-end exercises of the public API: the pieces composed together
//! rather than module by module.

use mathlite::calculus::{almost_equal, root_newton, RootSettings};
use mathlite::linalg::solve;
use mathlite::ode::{solve_rk45, Rk45Settings};
use mathlite::quad::{adaptive_simpson, simpson, AdaptiveSettings};
use mathlite::{Matrix, Vector, Vector2, Vector3};

const PI: f64 = std::f64::consts::PI;

#[test]
fn quadrature_inside_root_finding() {
    // Solve ∫₀ˣ sin t dt = 1, i.e. 1 - cos x = 1, whose root near pi/2 is
    // exactly pi/2. The integrand is evaluated through the quadrature stack
    // on every residual evaluation.
    let residual = |x: f64| {
        let integral = adaptive_simpson(f64::sin, 0.0, x, &AdaptiveSettings::default()).unwrap();
        integral - 1.0
    };
    let x = root_newton(residual, 1.0, &RootSettings::default()).unwrap();
    assert!(almost_equal(x, PI / 2.0, 1e-9, 0.0));
}

#[test]
fn vector_quadrature_matches_trajectory() {
    // ∫₀^T (cos t, sin t) dt computed two ways: directly by quadrature, and
    // as the endpoint of the ODE y' = (cos t, sin t), y(0) = 0.
    let f = |t: f64| Vector2::<f64>::from_array([t.cos(), t.sin()]);
    let span = 2.0;

    let by_quad = simpson(f, 0.0, span, 1000).unwrap();
    let traj = solve_rk45(
        |t, _y: &Vector2<f64>| f(t),
        0.0,
        Vector2::<f64>::zeros(),
        span,
        &Rk45Settings::default(),
    )
    .unwrap();
    let by_ode = traj[traj.len() - 1].1;

    assert!((by_quad - by_ode).norm_max() < 1e-6);
    assert!(almost_equal(by_quad[0], span.sin(), 1e-8, 0.0));
    assert!(almost_equal(by_quad[1], 1.0 - span.cos(), 1e-8, 0.0));
}

#[test]
fn linear_solve_feeds_ode() {
    // Steady state of y' = A y + b is the solution of A y = -b; integrating
    // the stable system long enough should converge to it.
    let a = Matrix::<f64, 2, 2>::new([[-2.0, 1.0], [1.0, -3.0]]);
    let b = Vector2::<f64>::from_array([1.0, 2.0]);

    let steady = solve(a, -b).unwrap();

    let traj = solve_rk45(
        |_t, y: &Vector2<f64>| a.vecmul(y) + b,
        0.0,
        Vector2::<f64>::zeros(),
        20.0,
        &Rk45Settings::default(),
    )
    .unwrap();
    let yf = traj[traj.len() - 1].1;
    assert!((yf - steady).norm_max() < 1e-6);
}

#[test]
fn cross_product_orthogonality() {
    let u = Vector3::<f64>::from_array([1.0, 2.0, 3.0]);
    let v = Vector3::<f64>::from_array([-4.0, 0.5, 2.0]);
    let w = u.cross(&v);
    assert!(w.dot(&u).abs() < 1e-12);
    assert!(w.dot(&v).abs() < 1e-12);
}

#[test]
fn solve_recovers_known_solution() {
    let a = Matrix::<f64, 3, 3>::new([[4.0, -2.0, 1.0], [3.0, 6.0, -4.0], [2.0, 1.0, 8.0]]);
    let x = Vector::<f64, 3>::from_array([0.5, -1.5, 2.0]);
    let b = a.vecmul(&x);
    let recovered = a.solve(&b).unwrap();
    assert!((recovered - x).norm_max() < 1e-12);
}
