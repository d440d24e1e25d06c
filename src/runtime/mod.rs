//! Runtime module
//!
//! The host-facing side of mylib: dynamic values, tables, and the extension
//! registry that dispatches host calls to the solver and table constructor.

pub mod extensions;
pub mod table;
pub mod value;

pub use extensions::{
    ext_ids, ExtCategory, ExtError, ExtFn, ExtSignature, ExtensionEntry, ExtensionRegistry,
};
pub use table::{Table, TableKey};
pub use value::{check_number, opt_integer, Value};
