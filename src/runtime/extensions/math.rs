//! Math extensions: quadratic solver
//!
//! `solve(a, b, c)` returns the two real roots, or `nil` plus a message when
//! the solver reports no real pair. Non-numeric coefficients are argument
//! errors.

use std::sync::Arc;

use mylib_core::{solve_with, Coefficients, DegeneratePolicy};
use tracing::debug;

use super::{ext_ids, ExtCategory, ExtError, ExtensionRegistry};
use crate::config::MylibConfig;
use crate::runtime::value::{check_number, Value};

/// Register math extensions under the configured module name
pub fn register_math(registry: &mut ExtensionRegistry, config: &MylibConfig) {
    let policy: DegeneratePolicy = config.solver.degenerate.into();

    registry.register_with_id(
        ext_ids::SOLVE,
        &config.module.name,
        "solve",
        "Solve a*x^2 + b*x + c = 0, returning both real roots",
        3,
        ExtCategory::Math,
        Arc::new(move |args| solve_ext(args, policy)),
    );
}

fn solve_ext(args: &[Value], policy: DegeneratePolicy) -> Result<Vec<Value>, ExtError> {
    let coeffs = Coefficients::new(
        check_number(args, 0)?,
        check_number(args, 1)?,
        check_number(args, 2)?,
    );

    match solve_with(coeffs, policy) {
        Ok(roots) => Ok(vec![Value::Number(roots.high), Value::Number(roots.low)]),
        Err(e) => {
            debug!(a = coeffs.a, b = coeffs.b, c = coeffs.c, error = %e, "no real roots");
            Ok(vec![Value::Nil, Value::String(e.message().to_string())])
        }
    }
}
