// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use account_ledger_rs::{Account, AccountNumber, AccountStore, LedgerError};
use clap::Parser;
use csv::Writer;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process;

/// Account Ledger - Seed the demo account and report account states
///
/// Registers the built-in demo account, prints it, and writes all account
/// states as CSV to stdout or to a file.
#[derive(Parser, Debug)]
#[command(name = "account-ledger-rs")]
#[command(about = "An account ledger that reports registered account states", long_about = None)]
struct Args {
    /// Write the account report to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let store = AccountStore::new();

    // Seed the demo account
    if let Err(e) = seed_demo_account(&store) {
        eprintln!("Error registering account: {}", e);
        process::exit(1);
    }

    // Write results to the requested destination
    let result = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => write_report(&store, file),
            Err(e) => {
                eprintln!("Error creating file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => write_report(&store, std::io::stdout()),
    };

    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Creates the hardcoded demo account, prints it, and registers it.
fn seed_demo_account(store: &AccountStore) -> Result<(), LedgerError> {
    let mut account = Account::new(AccountNumber(123));
    account.set_first_name("Muntasir");
    account.set_total_amount(dec!(100000));
    println!("{}", account);

    store.add_account(account)
}

/// Write account states to a CSV writer
///
/// Outputs all accounts in CSV format with 4 decimal precision.
///
/// # CSV Format
///
/// Columns: `account, name, total`
///
/// # Example
///
/// ```csv
/// account,name,total
/// 123,Muntasir,100000
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_report<W: Write>(store: &AccountStore, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    // Get all account snapshots and serialize each one
    for account in store.accounts() {
        wtr.serialize(&*account)?;
    }

    // Flush to ensure all data is written
    wtr.flush()?;
    Ok(())
}
