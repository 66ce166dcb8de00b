//! JSON persistence for the ledger.
//!
//! The whole ledger lives in one pretty-printed document: an array of flat
//! records `{id, amount, category, date, kind}`. Saving overwrites the file,
//! so the last writer wins.
//!
//! Variants are flattened on save. On load the text before `" ("` in `kind`
//! selects the variant, which means a saved currency view comes back as a
//! plain operation carrying its converted amount.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    Amount, EngineError, Entry, Investment, Ledger, Operation, OperationKind, ResultEngine,
};

/// Flat shape of one operation in the store document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOperation {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    pub kind: String,
}

impl From<&Operation> for StoredOperation {
    fn from(op: &Operation) -> Self {
        Self {
            id: op.id().to_string(),
            amount: op.amount().value(),
            category: op.category().to_string(),
            date: op.date(),
            kind: op.kind(),
        }
    }
}

impl TryFrom<StoredOperation> for Operation {
    type Error = EngineError;

    fn try_from(record: StoredOperation) -> Result<Self, Self::Error> {
        let base = record
            .kind
            .split_once(" (")
            .map_or(record.kind.as_str(), |(base, _)| base);
        let amount = Amount::new(record.amount);

        Ok(match OperationKind::try_from(base)? {
            OperationKind::Income => Operation::Income(Entry::restore(
                record.id,
                amount,
                record.category,
                record.date,
            )),
            OperationKind::Expense => Operation::Expense(Entry::restore(
                record.id,
                amount,
                record.category,
                record.date,
            )),
            OperationKind::Investment => Operation::from(Investment {
                operation_id: record.id,
                invested_amount: amount,
                sector: record.category,
                investment_date: record.date,
            }),
        })
    }
}

/// File-backed store for a [`Ledger`].
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. A missing file is an empty ledger; records with an
    /// unknown kind are skipped.
    pub fn try_load(&self) -> ResultEngine<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no store yet, starting empty");
                return Ok(Ledger::new());
            }
            Err(err) => return Err(err.into()),
        };

        let records: Vec<StoredOperation> = serde_json::from_str(&content)?;
        let operations = records.into_iter().filter_map(|record| {
            let id = record.id.clone();
            match Operation::try_from(record) {
                Ok(op) => Some(op),
                Err(err) => {
                    tracing::warn!(id = %id, "skipping stored operation: {err}");
                    None
                }
            }
        });
        let ledger = Ledger::from_operations(operations);
        tracing::info!(path = %self.path.display(), count = ledger.len(), "ledger loaded");
        Ok(ledger)
    }

    /// Like [`try_load`](Self::try_load), falling back to an empty ledger.
    pub fn load(&self) -> Ledger {
        self.try_load().unwrap_or_else(|err| {
            tracing::warn!(
                path = %self.path.display(),
                "cannot load ledger, starting empty: {err}"
            );
            Ledger::new()
        })
    }

    /// Overwrites the document with the current content of `ledger`.
    pub fn try_save(&self, ledger: &Ledger) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let records: Vec<StoredOperation> = ledger
            .all()
            .iter()
            .map(|op| StoredOperation::from(op.as_ref()))
            .collect();
        let payload = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, payload)?;
        tracing::info!(path = %self.path.display(), count = records.len(), "ledger saved");
        Ok(())
    }

    /// Like [`try_save`](Self::try_save), logging the failure instead of
    /// returning it. Returns whether the document was written.
    pub fn save(&self, ledger: &Ledger) -> bool {
        match self.try_save(ledger) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(path = %self.path.display(), "failed to save ledger: {err}");
                false
            }
        }
    }
}
