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

//! # Account Ledger
//!
//! This library provides a small account ledger, where account storage and
//! the deposit/withdraw business rules are separate collaborators, and an
//! independent notification dispatch abstraction with interchangeable
//! senders.
//!
//! ## Core Components
//!
//! - [`AccountStore`]: Registers accounts and looks them up by number
//! - [`Teller`]: Deposits to and withdraws from stored accounts
//! - [`Account`]: Account entity with number, holder name, and balance
//! - [`NotificationSender`]: Capability to dispatch a notification, with
//!   [`EmailSender`], [`SmsSender`], and [`MemorySender`] implementations
//! - [`Customer`]: Depends on the sender abstraction, never a concrete one
//! - [`LedgerError`]: Error types for ledger operation failures
//!
//! ## Example
//!
//! ```
//! use account_ledger_rs::{Account, AccountNumber, AccountStore, Teller};
//! use rust_decimal_macros::dec;
//!
//! let store = AccountStore::new();
//!
//! let mut account = Account::new(AccountNumber(123));
//! account.set_first_name("Muntasir");
//! account.set_total_amount(dec!(100000));
//! store.add_account(account).unwrap();
//!
//! let teller = Teller::new(&store);
//! teller.withdraw(dec!(2000), AccountNumber(123)).unwrap();
//!
//! let account = store.get_account(AccountNumber(123)).unwrap();
//! assert_eq!(account.total_amount(), dec!(98000));
//! ```
//!
//! ## Thread Safety
//!
//! The store handles concurrent access to accounts, allowing operations to
//! proceed in parallel for different accounts.

pub mod account;
mod base;
mod customer;
pub mod error;
mod notification;
mod store;
mod teller;

pub use account::Account;
pub use base::AccountNumber;
pub use customer::Customer;
pub use error::LedgerError;
pub use notification::{EmailSender, MemorySender, NotificationSender, SmsSender};
pub use store::AccountStore;
pub use teller::Teller;
