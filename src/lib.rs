//! mylib - native extension module for a scripting runtime
//!
//! Registers two functions with a host runtime:
//!
//! - **`mylib.createtable([narr], [nrec])`**: empty table with size hints
//! - **`mylib.solve(a, b, c)`**: both real roots of `a*x*x + b*x + c = 0`
//!
//! The solver itself is a plain typed function in [`mylib_core`]; this crate
//! adds the host boundary (dynamic [`Value`]s, strict argument checks, the
//! "nil plus message" failure idiom), configuration, and a C ABI.
//!
//! # Example
//!
//! ```rust
//! use mylib::{MylibConfig, Value};
//!
//! let registry = mylib::open(&MylibConfig::default());
//!
//! let roots = registry
//!     .call_by_name("mylib.solve", &[1.0.into(), 0.0.into(), (-4.0).into()])
//!     .unwrap();
//! assert_eq!(roots, vec![Value::Number(2.0), Value::Number(-2.0)]);
//!
//! let failed = registry
//!     .call_by_name("mylib.solve", &[1.0.into(), 0.0.into(), 1.0.into()])
//!     .unwrap();
//! assert_eq!(failed, vec![Value::Nil, Value::from("imaginary roots!")]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Host runtime   │  mylib.solve(1, 0, -4)
//! └────────┬────────┘
//!          │  &[Value]
//!          ▼
//! ┌─────────────────┐
//! │    Registry     │  name -> id, arity and type checks
//! └────────┬────────┘
//!          │  f64, f64, f64
//!          ▼
//! ┌─────────────────┐
//! │   mylib-core    │  Result<Roots, SolveError>
//! └─────────────────┘
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod ffi;
pub mod runtime;

pub use config::{ConfigError, ConfigResult, DegenerateMode, MylibConfig};
pub use runtime::{
    ext_ids, ExtCategory, ExtError, ExtFn, ExtSignature, ExtensionEntry, ExtensionRegistry, Table,
    TableKey, Value,
};

// Typed solver API
pub use mylib_core::{
    discriminant, solve, solve_with, Coefficients, DegeneratePolicy, Roots, SolveError,
};

/// Open the mylib module: a registry with `createtable` and `solve`
/// registered under `config.module.name`.
pub fn open(config: &MylibConfig) -> ExtensionRegistry {
    ExtensionRegistry::open(config)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
