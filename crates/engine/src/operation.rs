//! Operation primitives.
//!
//! An [`Operation`] is one financial event seen through a single set of
//! accessors, whatever its underlying shape: a plain [`Entry`] for incomes and
//! expenses, an [`InvestmentAdapter`] over a foreign record, or a
//! [`CurrencyView`] over another operation.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{Amount, CurrencyView, EngineError, Entry, Investment, InvestmentAdapter, Rate};

/// Kind of the innermost record of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Income,
    Expense,
    Investment,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Investment => "investment",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OperationKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "investment" => Ok(Self::Investment),
            other => Err(EngineError::InvalidKind(format!(
                "unknown operation kind: {other}"
            ))),
        }
    }
}

/// A financial event.
///
/// The variant set is closed. Every variant answers the same accessors; none
/// of them can change an operation once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Income(Entry),
    Expense(Entry),
    Investment(InvestmentAdapter),
    Converted(CurrencyView),
}

impl Operation {
    pub fn income(amount: Amount, category: impl Into<String>) -> Self {
        Self::Income(Entry::new(amount, category))
    }

    pub fn expense(amount: Amount, category: impl Into<String>) -> Self {
        Self::Expense(Entry::new(amount, category))
    }

    /// Adapts `investment` without copying it.
    pub fn investment(investment: Arc<Investment>) -> Self {
        Self::Investment(InvestmentAdapter::new(investment))
    }

    pub fn converted(
        inner: Arc<Operation>,
        rate: Rate,
        currency_code: impl Into<String>,
    ) -> Self {
        Self::Converted(CurrencyView::new(inner, rate, currency_code))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Income(entry) | Self::Expense(entry) => entry.id(),
            Self::Investment(adapter) => adapter.id(),
            Self::Converted(view) => view.id(),
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Self::Income(entry) | Self::Expense(entry) => entry.amount(),
            Self::Investment(adapter) => adapter.amount(),
            Self::Converted(view) => view.amount(),
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Income(entry) | Self::Expense(entry) => entry.category(),
            Self::Investment(adapter) => adapter.category(),
            Self::Converted(view) => view.category(),
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Self::Income(entry) | Self::Expense(entry) => entry.date(),
            Self::Investment(adapter) => adapter.date(),
            Self::Converted(view) => view.date(),
        }
    }

    /// Descriptive label, e.g. `income` or `expense (USD)`.
    pub fn kind(&self) -> String {
        match self {
            Self::Converted(view) => view.kind(),
            _ => self.base_kind().as_str().to_string(),
        }
    }

    /// Kind of the innermost record, looking through currency views.
    pub fn base_kind(&self) -> OperationKind {
        match self {
            Self::Income(_) => OperationKind::Income,
            Self::Expense(_) => OperationKind::Expense,
            Self::Investment(adapter) => adapter.kind(),
            Self::Converted(view) => view.inner().base_kind(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind(), self.category(), self.amount())
    }
}

impl From<Investment> for Operation {
    fn from(investment: Investment) -> Self {
        Self::Investment(investment.into())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn kind_labels() {
        let income = Operation::income(Amount::new(dec!(1)), "a");
        let expense = Operation::expense(Amount::new(dec!(1)), "b");
        let investment = Operation::from(Investment::new(Amount::new(dec!(1)), "c"));

        assert_eq!(income.kind(), "income");
        assert_eq!(expense.kind(), "expense");
        assert_eq!(investment.kind(), "investment");

        let converted = Operation::converted(Arc::new(expense), Rate::ONE, "USD");
        assert_eq!(converted.kind(), "expense (USD)");
        assert_eq!(converted.base_kind(), OperationKind::Expense);
    }

    #[test]
    fn kind_parses_from_label() {
        assert_eq!(OperationKind::try_from("income").unwrap(), OperationKind::Income);
        assert_eq!(
            OperationKind::try_from("investment").unwrap(),
            OperationKind::Investment
        );
        assert!(OperationKind::try_from("refund").is_err());
    }

    #[test]
    fn construction_assigns_unique_ids() {
        let a = Operation::income(Amount::new(dec!(5)), "x");
        let b = Operation::income(Amount::new(dec!(5)), "x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn empty_category_is_allowed() {
        let op = Operation::expense(Amount::new(dec!(3)), "");
        assert_eq!(op.category(), "");
    }
}
