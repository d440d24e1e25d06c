//! C ABI Tests

use super::*;
use std::ffi::CStr;

fn message(code: i32) -> &'static str {
    unsafe { CStr::from_ptr(mylib_strerror(code)) }
        .to_str()
        .unwrap()
}

#[test]
fn test_solve_writes_roots() {
    let (mut high, mut low) = (0.0, 0.0);
    let rc = unsafe { mylib_solve(1.0, 0.0, -4.0, &mut high, &mut low) };
    assert_eq!(rc, MYLIB_OK);
    assert_eq!((high, low), (2.0, -2.0));
}

#[test]
fn test_failure_leaves_outputs() {
    let (mut high, mut low) = (7.0, 7.0);
    let rc = unsafe { mylib_solve(1.0, 0.0, 1.0, &mut high, &mut low) };
    assert_eq!(rc, MYLIB_IMAGINARY_ROOTS);
    assert_eq!((high, low), (7.0, 7.0));

    let rc = unsafe { mylib_solve(0.0, 2.0, 4.0, &mut high, &mut low) };
    assert_eq!(rc, MYLIB_DEGENERATE);
}

#[test]
fn test_null_pointer() {
    let mut low = 0.0;
    let rc = unsafe { mylib_solve(1.0, 0.0, -4.0, std::ptr::null_mut(), &mut low) };
    assert_eq!(rc, MYLIB_NULL_POINTER);
}

#[test]
fn test_strerror_matches_solver_messages() {
    assert_eq!(message(MYLIB_IMAGINARY_ROOTS), mylib_core::IMAGINARY_ROOTS_MSG);
    assert_eq!(message(MYLIB_DEGENERATE), mylib_core::DEGENERATE_MSG);
    assert_eq!(message(MYLIB_OK), "ok");
    assert_eq!(message(42), "unknown status");
}
