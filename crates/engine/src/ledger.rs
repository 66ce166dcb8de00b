//! The append-only store of operations.

use std::sync::{Arc, PoisonError, RwLock};

use crate::Operation;

/// Ordered collection of operations: insertion order is the order in which
/// they were added. Operations are never updated or removed.
///
/// `append` takes the write lock, so callers on different threads still get
/// a single, deterministic order.
#[derive(Debug, Default)]
pub struct Ledger {
    operations: RwLock<Vec<Arc<Operation>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger already holding `operations`, in iteration order.
    pub fn from_operations(operations: impl IntoIterator<Item = Operation>) -> Self {
        Self {
            operations: RwLock::new(operations.into_iter().map(Arc::new).collect()),
        }
    }

    /// Adds `operation` at the end. No validation, no deduplication.
    pub fn append(&self, operation: Operation) -> Arc<Operation> {
        let operation = Arc::new(operation);
        self.operations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&operation));
        operation
    }

    /// Snapshot of every operation in insertion order.
    ///
    /// The returned vector is detached from the ledger; changing it does not
    /// change the ledger.
    pub fn all(&self) -> Vec<Arc<Operation>> {
        self.operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
