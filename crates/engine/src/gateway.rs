//! Role-gated access to a [`Ledger`].
//!
//! Every mutation goes through [`Gateway::add`], which refuses it for
//! [`Role::Reader`]. Reads ([`Gateway::list`], [`Gateway::summarize`]) are
//! open to every role.

use std::{fmt, sync::Arc};

use crate::{Amount, CurrencyView, Ledger, Operation, Rate, Role};

/// Message shown when a reader tries to add an operation.
pub const ACCESS_DENIED: &str = "Access denied: only editors and admins can add operations.";

/// Result of [`Gateway::add`].
///
/// A refusal is a normal outcome, not an error: the caller reports it and
/// carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    Added { id: String },
    Denied { role: Role },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// User-facing feedback for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Added { id } => format!("Operation added ({id})."),
            Self::Denied { .. } => ACCESS_DENIED.to_string(),
        }
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Aggregate of every ledger operation converted to one currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencySummary {
    pub total: Amount,
    pub count: usize,
    pub currency: String,
}

impl fmt::Display for CurrencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sum of all operations in {} transactions: {} {}",
            self.count, self.total, self.currency
        )
    }
}

/// Access-controlled proxy in front of a borrowed [`Ledger`].
///
/// The role is fixed for the gateway's lifetime. Several gateways may borrow
/// the same ledger; they do not coordinate with each other.
#[derive(Clone, Copy, Debug)]
pub struct Gateway<'a> {
    role: Role,
    ledger: &'a Ledger,
}

impl<'a> Gateway<'a> {
    pub fn new(role: Role, ledger: &'a Ledger) -> Self {
        Self { role, ledger }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Appends `operation` unless the role is read-only.
    pub fn add(&self, operation: Operation) -> AddOutcome {
        if !self.role.can_write() {
            tracing::warn!(
                role = %self.role,
                kind = %operation.kind(),
                "refused to add operation"
            );
            return AddOutcome::Denied { role: self.role };
        }

        let stored = self.ledger.append(operation);
        tracing::debug!(id = stored.id(), kind = %stored.kind(), "operation added");
        AddOutcome::Added {
            id: stored.id().to_string(),
        }
    }

    /// Every operation in insertion order.
    pub fn list(&self) -> Vec<Arc<Operation>> {
        self.ledger.all()
    }

    /// Converts each operation at `rate` and sums the converted amounts.
    pub fn summarize(&self, rate: Rate, currency_code: &str) -> CurrencySummary {
        let operations = self.ledger.all();
        let total: Amount = operations
            .iter()
            .map(|op| CurrencyView::new(Arc::clone(op), rate, currency_code).amount())
            .sum();
        tracing::debug!(%rate, currency = currency_code, %total, "ledger summarized");

        CurrencySummary {
            total,
            count: operations.len(),
            currency: currency_code.to_string(),
        }
    }
}
