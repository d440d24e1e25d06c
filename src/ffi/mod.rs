//! C ABI for mylib
//!
//! Entry points for native hosts that link the `cdylib` directly instead of
//! going through the [`ExtensionRegistry`](crate::runtime::ExtensionRegistry).
//!
//! # Example
//!
//! ```c
//! double hi, lo;
//! int rc = mylib_solve(1.0, 0.0, -4.0, &hi, &lo);
//! if (rc != MYLIB_OK) {
//!     fprintf(stderr, "%s\n", mylib_strerror(rc));
//! }
//! ```

use std::os::raw::c_char;

use mylib_core::{solve, SolveError};

/// Roots written
pub const MYLIB_OK: i32 = 0;
/// Negative discriminant
pub const MYLIB_IMAGINARY_ROOTS: i32 = 1;
/// Zero leading coefficient
pub const MYLIB_DEGENERATE: i32 = 2;
/// An out-pointer was null
pub const MYLIB_NULL_POINTER: i32 = -1;

/// Status code reported for a solver failure
pub fn status_code(e: SolveError) -> i32 {
    match e {
        SolveError::ImaginaryRoots => MYLIB_IMAGINARY_ROOTS,
        SolveError::DegenerateEquation => MYLIB_DEGENERATE,
    }
}

/// Solve `a*x*x + b*x + c = 0`, writing the roots through `high` and `low`.
///
/// The out-pointers are left untouched unless the return value is
/// [`MYLIB_OK`].
///
/// # Safety
///
/// `high` and `low` must each be null or valid for a write of one `f64`.
#[no_mangle]
pub unsafe extern "C" fn mylib_solve(
    a: f64,
    b: f64,
    c: f64,
    high: *mut f64,
    low: *mut f64,
) -> i32 {
    if high.is_null() || low.is_null() {
        return MYLIB_NULL_POINTER;
    }

    match solve(a, b, c) {
        Ok(roots) => {
            *high = roots.high;
            *low = roots.low;
            MYLIB_OK
        }
        Err(e) => status_code(e),
    }
}

/// Static NUL-terminated message for a status code returned by
/// [`mylib_solve`]. Never null.
#[no_mangle]
pub extern "C" fn mylib_strerror(code: i32) -> *const c_char {
    let msg: &'static [u8] = match code {
        MYLIB_OK => b"ok\0",
        MYLIB_IMAGINARY_ROOTS => b"imaginary roots!\0",
        MYLIB_DEGENERATE => b"degenerate equation: leading coefficient is zero\0",
        MYLIB_NULL_POINTER => b"null output pointer\0",
        _ => b"unknown status\0",
    };
    msg.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests;
