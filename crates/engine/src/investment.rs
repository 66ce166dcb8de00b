//! Investments and their adapter.
//!
//! An [`Investment`] comes with its own field names (`invested_amount`,
//! `sector`, `investment_date`) and is not an operation by itself. The
//! [`InvestmentAdapter`] exposes it through the operation accessors without
//! copying it: the adapter and the caller share the same `Arc`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Amount, OperationKind};

/// Investment record as produced outside the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Investment {
    pub operation_id: String,
    pub invested_amount: Amount,
    pub sector: String,
    pub investment_date: DateTime<Utc>,
}

impl Investment {
    /// Creates an investment stamped with a fresh id and the current time.
    pub fn new(invested_amount: Amount, sector: impl Into<String>) -> Self {
        Self {
            operation_id: Uuid::new_v4().to_string(),
            invested_amount,
            sector: sector.into(),
            investment_date: Utc::now(),
        }
    }
}

/// Read-only operation view over a shared [`Investment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestmentAdapter {
    investment: Arc<Investment>,
}

impl InvestmentAdapter {
    pub fn new(investment: Arc<Investment>) -> Self {
        Self { investment }
    }

    /// The adapted record.
    pub fn investment(&self) -> &Arc<Investment> {
        &self.investment
    }

    pub fn id(&self) -> &str {
        &self.investment.operation_id
    }

    pub fn amount(&self) -> Amount {
        self.investment.invested_amount
    }

    pub fn category(&self) -> &str {
        &self.investment.sector
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.investment.investment_date
    }

    pub fn kind(&self) -> OperationKind {
        OperationKind::Investment
    }
}

impl From<Investment> for InvestmentAdapter {
    fn from(investment: Investment) -> Self {
        Self::new(Arc::new(investment))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn adapter_renames_every_field() {
        let investment = Arc::new(Investment::new(Amount::new(dec!(250)), "energy"));
        let adapter = InvestmentAdapter::new(Arc::clone(&investment));

        assert_eq!(adapter.id(), investment.operation_id);
        assert_eq!(adapter.amount(), investment.invested_amount);
        assert_eq!(adapter.category(), investment.sector);
        assert_eq!(adapter.date(), investment.investment_date);
        assert_eq!(adapter.kind(), OperationKind::Investment);
    }

    #[test]
    fn adapter_shares_the_record() {
        let investment = Arc::new(Investment::new(Amount::new(dec!(10)), "tech"));
        let adapter = InvestmentAdapter::new(Arc::clone(&investment));

        assert!(Arc::ptr_eq(adapter.investment(), &investment));
        assert_eq!(Arc::strong_count(&investment), 2);
    }
}
