//! mylib core routines
//!
//! Pure, allocation-free functions that the `mylib` extension module exposes
//! to its host runtime. Nothing here knows about the host's value model.
//!
//! # Example
//!
//! ```rust
//! use mylib_core::solve;
//!
//! let roots = solve(1.0, 0.0, -4.0).unwrap();
//! assert_eq!((roots.high, roots.low), (2.0, -2.0));
//! ```

pub mod quadratic;

pub use quadratic::{
    discriminant, solve, solve_with, Coefficients, DegeneratePolicy, Roots, SolveError,
    DEGENERATE_MSG, IMAGINARY_ROOTS_MSG,
};
