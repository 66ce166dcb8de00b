//! Text menu driving the ledger.
//!
//! Input and output are generic so the whole loop runs against in-memory
//! buffers in tests. End of input at any prompt ends the session.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use chrono::Local;
use engine::{
    Amount, EngineError, Gateway, Investment, Ledger, LedgerStore, Operation, Rate, Role,
};

use crate::error::Result;

const MENU: &str = "\n--- Menu ---\n\
1. Add income\n\
2. Add expense\n\
3. Add investment\n\
4. List all operations\n\
5. Show currency summary\n\
0. Exit";

/// Asks for the session role. Unknown names, and end of input, mean
/// [`Role::Reader`].
pub fn ask_role<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Role> {
    write!(output, "Enter user role (Reader / Editor / Admin): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(Role::Reader);
    }
    role_or_reader(&line, output)
}

/// Parses `raw`, reporting and falling back to [`Role::Reader`] when it is
/// not a known role.
pub fn role_or_reader<W: Write>(raw: &str, output: &mut W) -> Result<Role> {
    match raw.parse::<Role>() {
        Ok(role) => Ok(role),
        Err(err) => {
            tracing::warn!("{err}, falling back to reader");
            writeln!(output, "Unknown role, continuing as {}.", Role::Reader)?;
            Ok(Role::Reader)
        }
    }
}

pub struct Menu<'a, R, W> {
    gateway: Gateway<'a>,
    ledger: &'a Ledger,
    store: Option<&'a LedgerStore>,
    base_currency: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        role: Role,
        ledger: &'a Ledger,
        store: Option<&'a LedgerStore>,
        base_currency: &'a str,
        input: R,
        output: W,
    ) -> Self {
        Self {
            gateway: Gateway::new(role, ledger),
            ledger,
            store,
            base_currency,
            input,
            output,
        }
    }

    /// Runs until `0` is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Your choice: ")? else {
                return Ok(());
            };
            writeln!(self.output)?;

            let keep_going = match choice.as_str() {
                "1" => self.add_entry(
                    |amount, category| Operation::income(amount, category),
                    "Income amount: ",
                    "Category: ",
                )?,
                "2" => self.add_entry(
                    |amount, category| Operation::expense(amount, category),
                    "Expense amount: ",
                    "Category: ",
                )?,
                "3" => self.add_entry(
                    |amount, sector| Operation::from(Investment::new(amount, sector)),
                    "Investment amount: ",
                    "Sector: ",
                )?,
                "4" => {
                    self.list()?;
                    true
                }
                "5" => self.summary()?,
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Unknown command!")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns `false` when input ended before the operation was complete.
    fn add_entry<F>(&mut self, build: F, amount_label: &str, category_label: &str) -> Result<bool>
    where
        F: FnOnce(Amount, String) -> Operation,
    {
        let Some(amount) = self.prompt_amount(amount_label)? else {
            return Ok(false);
        };
        let Some(category) = self.prompt(category_label)? else {
            return Ok(false);
        };

        let outcome = self.gateway.add(build(amount, category));
        writeln!(self.output, "{outcome}")?;

        if outcome.is_added()
            && let Some(store) = self.store
            && !store.save(self.ledger)
        {
            writeln!(self.output, "Warning: changes were not saved.")?;
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<()> {
        let operations = self.gateway.list();
        if operations.is_empty() {
            writeln!(self.output, "No operations yet.")?;
            return Ok(());
        }

        for op in operations {
            writeln!(
                self.output,
                "{} | {:<15} | {:<10} | {:>8} {}",
                op.date().with_timezone(&Local).format("%d.%m.%Y"),
                op.kind(),
                op.category(),
                op.amount(),
                self.base_currency
            )?;
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<bool> {
        let Some(rate) = self.prompt_parsed::<Rate>("Exchange rate (e.g. USD = 0.027): ")? else {
            return Ok(false);
        };
        let Some(code) = self.prompt("Currency name (e.g. USD): ")? else {
            return Ok(false);
        };

        let summary = self.gateway.summarize(rate, &code);
        writeln!(self.output, "\n{summary}\n")?;
        Ok(true)
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Amount>> {
        loop {
            let Some(amount) = self.prompt_parsed::<Amount>(label)? else {
                return Ok(None);
            };
            if amount.is_positive() {
                return Ok(Some(amount));
            }
            writeln!(self.output, "Amount must be greater than zero.")?;
        }
    }

    /// Re-prompts until the answer parses.
    fn prompt_parsed<T>(&mut self, label: &str) -> Result<Option<T>>
    where
        T: FromStr<Err = EngineError>,
    {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match raw.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}. Try again.")?,
            }
        }
    }

    /// Trimmed answer, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
