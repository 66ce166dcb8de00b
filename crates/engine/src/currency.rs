use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{Amount, Operation, Rate};

/// An operation re-expressed in another currency.
///
/// The view keeps a shared handle on the wrapped operation and computes the
/// converted amount on every call; nothing is cached and the wrapped
/// operation is never touched. `id`, `category` and `date` are the wrapped
/// ones.
///
/// The currency code is a display label only (`"USD"`, `"EUR"`, ...), it is
/// not checked against any list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyView {
    inner: Arc<Operation>,
    rate: Rate,
    currency_code: String,
}

impl CurrencyView {
    pub fn new(inner: Arc<Operation>, rate: Rate, currency_code: impl Into<String>) -> Self {
        Self {
            inner,
            rate,
            currency_code: currency_code.into(),
        }
    }

    /// The wrapped operation.
    pub fn inner(&self) -> &Arc<Operation> {
        &self.inner
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn id(&self) -> &str {
        self.inner.id()
    }

    /// `round(inner.amount * rate, 2)`, see [`Amount::convert`].
    pub fn amount(&self) -> Amount {
        self.inner.amount().convert(self.rate)
    }

    pub fn category(&self) -> &str {
        self.inner.category()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.inner.date()
    }

    pub fn kind(&self) -> String {
        format!("{} ({})", self.inner.kind(), self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn view_converts_amount_and_labels_kind() {
        let income = Arc::new(Operation::income(Amount::new(dec!(100)), "salary"));
        let view = CurrencyView::new(Arc::clone(&income), Rate::new(dec!(0.027)), "USD");

        assert_eq!(view.amount().value(), dec!(2.70));
        assert_eq!(view.kind(), "income (USD)");
        assert_eq!(view.id(), income.id());
        assert_eq!(view.category(), "salary");
        assert_eq!(view.date(), income.date());
    }

    #[test]
    fn view_leaves_wrapped_operation_untouched() {
        let expense = Arc::new(Operation::expense(Amount::new(dec!(40)), "food"));
        let before = (*expense).clone();
        let view = CurrencyView::new(Arc::clone(&expense), Rate::new(dec!(3)), "PLN");

        assert_eq!(view.amount().value(), dec!(120));
        assert_eq!(*expense, before);
    }

    #[test]
    fn unit_rate_is_identity() {
        let expense = Arc::new(Operation::expense(Amount::new(dec!(19.99)), "books"));
        let view = CurrencyView::new(Arc::clone(&expense), Rate::ONE, "UAH");

        assert_eq!(view.amount(), expense.amount());
    }

    #[test]
    fn zero_and_negative_rates_are_accepted() {
        let income = Arc::new(Operation::income(Amount::new(dec!(10)), "gift"));

        let zero = CurrencyView::new(Arc::clone(&income), Rate::new(dec!(0)), "X");
        assert!(zero.amount().is_zero());

        let negative = CurrencyView::new(income, Rate::new(dec!(-2)), "X");
        assert_eq!(negative.amount().value(), dec!(-20));
    }

    #[test]
    fn views_can_be_stacked() {
        let income = Arc::new(Operation::income(Amount::new(dec!(100)), "salary"));
        let usd = Arc::new(Operation::converted(income, Rate::new(dec!(0.5)), "USD"));
        let eur = CurrencyView::new(usd, Rate::new(dec!(0.9)), "EUR");

        assert_eq!(eur.amount().value(), dec!(45));
        assert_eq!(eur.kind(), "income (USD) (EUR)");
    }
}
