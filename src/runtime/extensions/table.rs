//! Table extensions: pre-sized table construction

use std::sync::Arc;

use tracing::warn;

use super::{ext_ids, ExtCategory, ExtError, ExtensionRegistry};
use crate::config::MylibConfig;
use crate::runtime::table::Table;
use crate::runtime::value::{opt_integer, Value};

/// Register table extensions under the configured module name
pub fn register_table(registry: &mut ExtensionRegistry, config: &MylibConfig) {
    let max_prealloc = config.table.max_prealloc;

    registry.register_with_id(
        ext_ids::CREATETABLE,
        &config.module.name,
        "createtable",
        "Create an empty table with optional array and record size hints",
        0,
        ExtCategory::Table,
        Arc::new(move |args| createtable_ext(args, max_prealloc)),
    );
}

fn createtable_ext(args: &[Value], max_prealloc: usize) -> Result<Vec<Value>, ExtError> {
    let narr = size_hint(args, 0, max_prealloc)?;
    let nrec = size_hint(args, 1, max_prealloc)?;
    Ok(vec![Value::Table(Table::with_capacity(narr, nrec))])
}

/// Optional non-negative size hint, clamped to `max`
fn size_hint(args: &[Value], pos: usize, max: usize) -> Result<usize, ExtError> {
    let hint = opt_integer(args, pos, 0)?;
    let hint = usize::try_from(hint).map_err(|_| ExtError::ArgError {
        position: pos + 1,
        message: format!("size hint must be non-negative, got {}", hint),
    })?;

    if hint > max {
        warn!(requested = hint, max, "clamping table size hint");
        return Ok(max);
    }
    Ok(hint)
}
