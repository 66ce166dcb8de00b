//! The module contains the `Entry` type, the plain record behind incomes and
//! expenses.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::Amount;

/// A recorded movement: an income or an expense, depending on the
/// [`Operation`](crate::Operation) variant holding it.
///
/// `id` and `date` are assigned once at construction and there is no way to
/// change any field afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    id: String,
    amount: Amount,
    category: String,
    date: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry stamped with a fresh id and the current time.
    pub fn new(amount: Amount, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            category: category.into(),
            date: Utc::now(),
        }
    }

    /// Rebuilds an entry whose identity was assigned earlier (e.g. by the
    /// store).
    pub(crate) fn restore(
        id: String,
        amount: Amount,
        category: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
