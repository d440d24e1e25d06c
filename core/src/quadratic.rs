//! Quadratic equation solver
//!
//! Solves `a*x*x + b*x + c = 0` over the reals.

use std::fmt;

/// Message reported when the discriminant is negative.
pub const IMAGINARY_ROOTS_MSG: &str = "imaginary roots!";

/// Message reported when the leading coefficient is zero.
pub const DEGENERATE_MSG: &str = "degenerate equation: leading coefficient is zero";

/// Reasons a quadratic has no pair of real roots to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Discriminant is negative; the roots are complex
    ImaginaryRoots,
    /// `a == 0`; the equation is linear or constant
    DegenerateEquation,
}

impl SolveError {
    /// Fixed human-readable message for this error.
    pub const fn message(&self) -> &'static str {
        match self {
            SolveError::ImaginaryRoots => IMAGINARY_ROOTS_MSG,
            SolveError::DegenerateEquation => DEGENERATE_MSG,
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SolveError {}

/// What to do when the leading coefficient is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Report [`SolveError::DegenerateEquation`]
    #[default]
    Reject,
    /// Evaluate the textbook formula unguarded and return whatever IEEE
    /// division produces (`inf` / `NaN`)
    Propagate,
}

/// The three coefficients of `a*x*x + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `b*b - 4*a*c`
    pub fn discriminant(&self) -> f64 {
        discriminant(self.a, self.b, self.c)
    }

    /// Evaluate the polynomial at `x`. Zero (within rounding) at a root.
    pub fn residual(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0
    }

    /// Solve with the default [`DegeneratePolicy::Reject`] policy.
    pub fn solve(&self) -> Result<Roots, SolveError> {
        solve_with(*self, DegeneratePolicy::Reject)
    }
}

/// Two real roots.
///
/// `high` is the `-b + sqrt(d)` branch and `low` the `-b - sqrt(d)` branch.
/// For `a > 0` this puts the larger root first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    pub high: f64,
    pub low: f64,
}

impl Roots {
    /// Both roots coincide (zero discriminant).
    pub fn is_double(&self) -> bool {
        self.high == self.low
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.high, self.low)
    }
}

/// Compute the discriminant `b*b - 4*a*c`.
///
/// # Test Cases
/// - discriminant(1, 0, -4) = 16
/// - discriminant(1, 2, 1) = 0
/// - discriminant(1, 0, 1) = -4
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve `a*x*x + b*x + c = 0`, rejecting `a == 0`.
///
/// # Test Cases
/// - solve(1, 0, -4) = (2, -2)
/// - solve(1, 2, 1) = (-1, -1)
/// - solve(1, 0, 1) = "imaginary roots!"
/// - solve(0, 2, 4) = degenerate equation
pub fn solve(a: f64, b: f64, c: f64) -> Result<Roots, SolveError> {
    solve_with(Coefficients::new(a, b, c), DegeneratePolicy::Reject)
}

/// Solve with an explicit policy for a zero leading coefficient.
pub fn solve_with(coeffs: Coefficients, policy: DegeneratePolicy) -> Result<Roots, SolveError> {
    let Coefficients { a, b, c } = coeffs;

    if coeffs.is_degenerate() && policy == DegeneratePolicy::Reject {
        return Err(SolveError::DegenerateEquation);
    }

    let d = discriminant(a, b, c);
    if d < 0.0 {
        return Err(SolveError::ImaginaryRoots);
    }

    if coeffs.is_degenerate() {
        return Ok(textbook_roots(a, b, d));
    }

    Ok(stable_roots(a, b, c, d))
}

/// Unguarded `(-b +- sqrt(d)) / 2a`.
fn textbook_roots(a: f64, b: f64, d: f64) -> Roots {
    let sqrt_d = d.sqrt();
    let two_a = 2.0 * a;
    Roots {
        high: (-b + sqrt_d) / two_a,
        low: (-b - sqrt_d) / two_a,
    }
}

/// Roots without catastrophic cancellation between `-b` and `sqrt(d)`.
///
/// `q = -(b + sign(b) * sqrt(d)) / 2` gives one root as `q / a` and the
/// other as `c / q`; each is then put back on its `+`/`-` branch.
fn stable_roots(a: f64, b: f64, c: f64, d: f64) -> Roots {
    // Exact double root; c / q and q / a may differ in the last bit.
    // `+ 0.0` maps a zero root to +0.0 so it never prints as -0.
    if d == 0.0 {
        let r = -b / (2.0 * a) + 0.0;
        return Roots { high: r, low: r };
    }

    let sqrt_d = d.sqrt();
    if b >= 0.0 {
        let q = -0.5 * (b + sqrt_d);
        Roots {
            high: c / q + 0.0,
            low: q / a,
        }
    } else {
        let q = -0.5 * (b - sqrt_d);
        Roots {
            high: q / a,
            low: c / q + 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roots_satisfy(a: f64, b: f64, c: f64) {
        let coeffs = Coefficients::new(a, b, c);
        let roots = coeffs.solve().unwrap();
        for r in [roots.high, roots.low] {
            let scale = (a * r * r).abs() + (b * r).abs() + c.abs();
            assert!(
                coeffs.residual(r).abs() <= 1e-12 * scale.max(1.0),
                "root {} of ({}, {}, {}) has residual {}",
                r,
                a,
                b,
                c,
                coeffs.residual(r)
            );
        }
    }

    #[test]
    fn test_simple_roots() {
        assert_eq!(solve(1.0, 0.0, -4.0).unwrap().as_pair(), (2.0, -2.0));
        assert_eq!(solve(1.0, -3.0, 2.0).unwrap().as_pair(), (2.0, 1.0));
        assert_eq!(solve(2.0, 2.0, -4.0).unwrap().as_pair(), (1.0, -2.0));
    }

    #[test]
    fn test_double_root() {
        let roots = solve(1.0, 2.0, 1.0).unwrap();
        assert_eq!(roots.as_pair(), (-1.0, -1.0));
        assert!(roots.is_double());

        let roots = solve(4.0, -4.0, 1.0).unwrap();
        assert_eq!(roots.as_pair(), (0.5, 0.5));
    }

    #[test]
    fn test_zero_roots() {
        let roots = solve(3.0, 0.0, 0.0).unwrap();
        assert!(roots.is_double());
        assert_eq!(roots.high, 0.0);
        assert!(roots.high.is_sign_positive());

        let roots = solve(-3.0, 0.0, 0.0).unwrap();
        assert!(roots.high.is_sign_positive());
    }

    #[test]
    fn test_zero_root_is_positive_zero() {
        let roots = solve(1.0, 2.0, 0.0).unwrap();
        assert_eq!(roots.as_pair(), (0.0, -2.0));
        assert!(roots.high.is_sign_positive());

        let roots = solve(1.0, -2.0, 0.0).unwrap();
        assert_eq!(roots.as_pair(), (2.0, 0.0));
        assert!(roots.low.is_sign_positive());

        let roots = solve(-1.0, 2.0, -0.0).unwrap();
        assert!(roots.high.is_sign_positive() && roots.low.is_sign_positive());
    }

    #[test]
    fn test_imaginary_roots() {
        let err = solve(1.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, SolveError::ImaginaryRoots);
        assert_eq!(err.to_string(), "imaginary roots!");
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // Branch order is kept, so the smaller root comes first
        let roots = solve(-1.0, 0.0, 4.0).unwrap();
        assert_eq!(roots.as_pair(), (-2.0, 2.0));
    }

    #[test]
    fn test_degenerate_rejected() {
        assert_eq!(solve(0.0, 2.0, 4.0), Err(SolveError::DegenerateEquation));
        assert_eq!(solve(-0.0, 2.0, 4.0), Err(SolveError::DegenerateEquation));
    }

    #[test]
    fn test_degenerate_propagated() {
        let roots =
            solve_with(Coefficients::new(0.0, 2.0, 4.0), DegeneratePolicy::Propagate).unwrap();
        assert!(roots.high.is_nan());
        assert_eq!(roots.low, f64::NEG_INFINITY);
    }

    #[test]
    fn test_propagate_does_not_affect_quadratics() {
        let coeffs = Coefficients::new(1.0, 0.0, -4.0);
        assert_eq!(
            solve_with(coeffs, DegeneratePolicy::Propagate),
            coeffs.solve()
        );
    }

    #[test]
    fn test_cancellation_resistant() {
        // b*b dwarfs 4ac; the small root is lost by the textbook formula
        let roots = solve(1.0, 1e8, 1.0).unwrap();
        assert!((roots.high - -1e-8).abs() < 1e-20);
        assert_roots_satisfy(1.0, 1e8, 1.0);
        assert_roots_satisfy(1.0, -1e8, 1.0);
    }

    #[test]
    fn test_residuals() {
        assert_roots_satisfy(1.0, -5.0, 6.0);
        assert_roots_satisfy(0.5, 3.25, -7.0);
        assert_roots_satisfy(-2.0, 1.0, 10.0);
        assert_roots_satisfy(1e-3, 2.0, -1e3);
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, 0.0, -4.0), 16.0);
        assert_eq!(discriminant(1.0, 2.0, 1.0), 0.0);
        assert_eq!(Coefficients::new(1.0, 0.0, 1.0).discriminant(), -4.0);
    }
}
