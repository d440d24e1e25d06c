//! Extension registry for the mylib module
//!
//! Extensions are Rust functions the host runtime calls by qualified name
//! with a slice of dynamically typed [`Value`]s.
//!
//! # Architecture
//!
//! ```text
//! Host calls:       mylib.solve(1, 0, -4)
//!                          |
//!                          v
//! Registry resolves: "mylib.solve" -> ID 2
//!                          |
//!                          v
//! Runtime calls:    registry.call(2, args) -> [2.0, -2.0]
//! ```
//!
//! # Extension Categories
//!
//! | Category | ID Range | Description |
//! |----------|----------|-------------|
//! | Table | 1 | Table construction |
//! | Math | 2-99 | Numeric routines |
//! | User | 1000+ | Functions registered by the embedder |

pub mod math;
pub mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::value::Value;
use crate::config::MylibConfig;

// =============================================================================
// Error Types
// =============================================================================

/// Error type for extension operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtError {
    /// Extension not found
    #[error("Extension {0} not found")]
    NotFound(u32),

    /// No extension under this qualified name
    #[error("Function '{0}' not found")]
    UnknownFunction(String),

    /// Too few arguments
    #[error("Expected {expected} arguments, got {got}")]
    InvalidArgCount { expected: usize, got: usize },

    /// Argument has the wrong type
    #[error("bad argument #{position} ({expected} expected, got {got})")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// Argument has the right type but an unusable value
    #[error("bad argument #{position} ({message})")]
    ArgError { position: usize, message: String },

    /// Extension returned an error
    #[error("Extension error: {0}")]
    ExtensionError(String),
}

// =============================================================================
// Extension Category
// =============================================================================

/// Category of extension for organization and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtCategory {
    Table,
    Math,
    Other,
}

impl fmt::Display for ExtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtCategory::Table => write!(f, "table"),
            ExtCategory::Math => write!(f, "math"),
            ExtCategory::Other => write!(f, "other"),
        }
    }
}

// =============================================================================
// Extension Function Types
// =============================================================================

/// Extension function signature: args -> Result<return values, error>
pub type ExtFn = Arc<dyn Fn(&[Value]) -> Result<Vec<Value>, ExtError> + Send + Sync>;

/// Extension signature metadata
#[derive(Debug, Clone)]
pub struct ExtSignature {
    pub module: String,
    pub name: String,
    pub description: String,
    /// Required arguments; optional trailing arguments are not counted
    pub arg_count: usize,
    pub category: ExtCategory,
}

impl ExtSignature {
    /// `module.name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

/// A registered extension entry
pub struct ExtensionEntry {
    pub id: u32,
    pub signature: ExtSignature,
    pub func: ExtFn,
}

impl fmt::Debug for ExtensionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionEntry")
            .field("id", &self.id)
            .field("signature", &self.signature)
            .finish()
    }
}

// =============================================================================
// Extension Registry
// =============================================================================

pub struct ExtensionRegistry {
    by_id: HashMap<u32, ExtensionEntry>,
    by_name: HashMap<String, u32>,
    next_id: u32,
}

impl ExtensionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            next_id: ext_ids::USER_BASE,
        }
    }

    /// Create a registry with the mylib module opened
    pub fn open(config: &MylibConfig) -> Self {
        let mut registry = Self::new();
        table::register_table(&mut registry, config);
        math::register_math(&mut registry, config);
        debug!(
            module = %config.module.name,
            functions = registry.len(),
            "opened module"
        );
        registry
    }

    /// Register an extension and return its ID
    pub fn register(
        &mut self,
        module: &str,
        name: &str,
        description: &str,
        arg_count: usize,
        category: ExtCategory,
        func: ExtFn,
    ) -> u32 {
        let id = self.next_id;
        self.register_with_id(id, module, name, description, arg_count, category, func);
        id
    }

    /// Register an extension with a specific ID, replacing any entry that
    /// already holds the ID or the qualified name
    #[allow(clippy::too_many_arguments)]
    pub fn register_with_id(
        &mut self,
        id: u32,
        module: &str,
        name: &str,
        description: &str,
        arg_count: usize,
        category: ExtCategory,
        func: ExtFn,
    ) {
        let signature = ExtSignature {
            module: module.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            arg_count,
            category,
        };
        let qualified = signature.qualified_name();

        if let Some(old_id) = self.by_name.insert(qualified.clone(), id) {
            if old_id != id {
                self.by_id.remove(&old_id);
            }
        }
        if let Some(old) = self.by_id.insert(
            id,
            ExtensionEntry {
                id,
                signature,
                func,
            },
        ) {
            let old_name = old.signature.qualified_name();
            if old_name != qualified {
                self.by_name.remove(&old_name);
            }
        }

        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    pub fn get(&self, id: u32) -> Option<&ExtensionEntry> {
        self.by_id.get(&id)
    }

    pub fn get_id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ExtensionEntry> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// Call an extension by ID
    pub fn call(&self, id: u32, args: &[Value]) -> Result<Vec<Value>, ExtError> {
        let ext = self.get(id).ok_or(ExtError::NotFound(id))?;

        if args.len() < ext.signature.arg_count {
            return Err(ExtError::InvalidArgCount {
                expected: ext.signature.arg_count,
                got: args.len(),
            });
        }

        debug!(id, name = %ext.signature.name, args = args.len(), "calling extension");
        (ext.func)(args)
    }

    /// Call an extension by qualified name (`module.function`)
    pub fn call_by_name(&self, name: &str, args: &[Value]) -> Result<Vec<Value>, ExtError> {
        let id = self
            .get_id(name)
            .ok_or_else(|| ExtError::UnknownFunction(name.to_string()))?;
        self.call(id, args)
    }

    /// All entries, ordered by ID
    pub fn list(&self) -> Vec<&ExtensionEntry> {
        let mut entries: Vec<_> = self.by_id.values().collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    pub fn list_by_category(&self, category: ExtCategory) -> Vec<&ExtensionEntry> {
        self.list()
            .into_iter()
            .filter(|e| e.signature.category == category)
            .collect()
    }

    /// Functions registered under `module`, ordered by ID
    pub fn module_functions(&self, module: &str) -> Vec<&ExtensionEntry> {
        self.list()
            .into_iter()
            .filter(|e| e.signature.module == module)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Extension IDs
// =============================================================================

/// Predefined extension IDs (stable across releases)
pub mod ext_ids {
    // Table (1)
    pub const CREATETABLE: u32 = 1;

    // Math (2-99)
    pub const SOLVE: u32 = 2;

    // User (1000+)
    pub const USER_BASE: u32 = 1000;
}
