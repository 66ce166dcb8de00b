use std::io::{self, Write};

use engine::{Ledger, LedgerStore};

use crate::{error::Result, menu::Menu};

mod error;
mod menu;
mod settings;

fn main() -> Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "finops={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(io::stderr)
        .init();

    let store = settings.store.as_deref().map(|path| LedgerStore::new(path));
    let ledger = match &store {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "loading ledger");
            store.load()
        }
        None => {
            tracing::info!("no store configured, keeping operations in memory");
            Ledger::new()
        }
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    writeln!(output, "=== Financial Manager ===")?;

    let role = match settings.role.as_deref() {
        Some(raw) => menu::role_or_reader(raw, &mut output)?,
        None => menu::ask_role(&mut input, &mut output)?,
    };
    tracing::info!(%role, operations = ledger.len(), "session started");

    Menu::new(
        role,
        &ledger,
        store.as_ref(),
        &settings.base_currency,
        input,
        output,
    )
    .run()
}
