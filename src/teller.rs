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

//! Deposit and withdrawal business rules.
//!
//! The [`Teller`] is stateless: it borrows an [`AccountStore`] at
//! construction and every operation looks the target account up in that
//! store before mutating its balance. Both operations behave symmetrically;
//! a deposit is observable through [`AccountStore::get_account`] immediately
//! after it returns.
//!
//! Withdrawals do not check for sufficient funds. Balances are non-negative
//! by convention only.

use crate::base::AccountNumber;
use crate::error::LedgerError;
use crate::store::AccountStore;
use rust_decimal::Decimal;

/// Performs transactions against accounts held in an [`AccountStore`].
pub struct Teller<'a> {
    accounts: &'a AccountStore,
}

impl<'a> Teller<'a> {
    /// Creates a teller operating on the given store.
    pub fn new(accounts: &'a AccountStore) -> Self {
        Teller { accounts }
    }

    /// Adds `amount` to the balance of the registered account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account number is not
    /// registered.
    pub fn deposit(
        &self,
        amount: Decimal,
        account_number: AccountNumber,
    ) -> Result<(), LedgerError> {
        let mut account = self.accounts.get_account_mut(account_number)?;
        let updated = account.total_amount() + amount;
        account.set_total_amount(updated);
        Ok(())
    }

    /// Subtracts `amount` from the balance of the registered account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account number is not
    /// registered.
    pub fn withdraw(
        &self,
        amount: Decimal,
        account_number: AccountNumber,
    ) -> Result<(), LedgerError> {
        let mut account = self.accounts.get_account_mut(account_number)?;
        let updated = account.total_amount() - amount;
        account.set_total_amount(updated);
        Ok(())
    }
}
