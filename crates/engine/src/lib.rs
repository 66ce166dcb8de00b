//! Financial operations core.
//!
//! Incomes, expenses and adapted investments are all [`Operation`]s. They are
//! appended to a [`Ledger`] through a role-gated [`Gateway`], and reported in
//! any currency through [`CurrencyView`]s.
//!
//! ```rust
//! use engine::{Amount, Gateway, Ledger, Operation, Rate, Role};
//! use rust_decimal::Decimal;
//!
//! let ledger = Ledger::new();
//! let editor = Gateway::new(Role::Editor, &ledger);
//!
//! let outcome = editor.add(Operation::income(Amount::new(Decimal::from(100)), "salary"));
//! assert!(outcome.is_added());
//!
//! let summary = editor.summarize(Rate::new(Decimal::new(5, 1)), "USD");
//! assert_eq!(summary.to_string(), "Sum of all operations in 1 transactions: 50.00 USD");
//! ```

pub use currency::CurrencyView;
pub use entry::Entry;
pub use error::EngineError;
pub use gateway::{ACCESS_DENIED, AddOutcome, CurrencySummary, Gateway};
pub use investment::{Investment, InvestmentAdapter};
pub use ledger::Ledger;
pub use money::{Amount, Rate};
pub use operation::{Operation, OperationKind};
pub use role::Role;
pub use store::{LedgerStore, StoredOperation};

mod currency;
mod entry;
mod error;
mod gateway;
mod investment;
mod ledger;
mod money;
mod operation;
mod role;
mod store;

type ResultEngine<T> = Result<T, EngineError>;
