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

//! Account entity.
//!
//! An [`Account`] is plain data: an account number, the holder's first name,
//! and a balance. It starts empty and is populated through setters; the
//! business rules that move money live in [`crate::Teller`].
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use account_ledger_rs::{Account, AccountNumber};
//!
//! let account = Account::new(AccountNumber(1));
//! assert_eq!(account.total_amount(), Decimal::ZERO);
//! ```

use crate::base::AccountNumber;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Ledger account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    first_name: String,
    total_amount: Decimal,
}

impl Account {
    const DECIMAL_PRECISION: u32 = 4;

    /// Creates an account with an empty name and zero balance.
    pub fn new(account_number: AccountNumber) -> Self {
        Self {
            account_number,
            first_name: String::new(),
            total_amount: Decimal::ZERO,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn set_account_number(&mut self, account_number: AccountNumber) {
        self.account_number = account_number;
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    /// Current balance. Non-negative by convention, not enforced.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn set_total_amount(&mut self, total_amount: Decimal) {
        self.total_amount = total_amount;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account #{} ({}): {}",
            self.account_number, self.first_name, self.total_amount
        )
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Account", 3)?;
        state.serialize_field("account", &self.account_number)?;
        state.serialize_field("name", &self.first_name)?;
        state.serialize_field(
            "total",
            &self.total_amount.round_dp(Account::DECIMAL_PRECISION),
        )?;
        state.end()
    }
}
