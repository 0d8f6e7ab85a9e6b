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

//! Account storage and lookup.
//!
//! The [`AccountStore`] owns the registered accounts and nothing else:
//! registration and lookup by [`AccountNumber`]. Moving money is the job of
//! [`crate::Teller`], which operates on accounts through this store.
//!
//! # Thread Safety
//!
//! The store uses [`DashMap`] for concurrent access to accounts, so lookups
//! and per-account mutation are safe from multiple threads.

use crate::account::Account;
use crate::base::AccountNumber;
use crate::error::LedgerError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Registry of accounts indexed by account number.
///
/// # Invariants
///
/// - Account numbers are unique; a second registration under the same
///   number is rejected and leaves the original untouched.
/// - A missing account number is a recoverable [`LedgerError::AccountNotFound`],
///   never a panic.
pub struct AccountStore {
    /// Accounts indexed by account number.
    accounts: DashMap<AccountNumber, Account>,
}

impl AccountStore {
    /// Creates a new store with no accounts.
    pub fn new() -> Self {
        AccountStore {
            accounts: DashMap::new(),
        }
    }

    /// Registers an account for later lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateAccount`] if an account with the same
    /// number is already registered.
    pub fn add_account(&self, account: Account) -> Result<(), LedgerError> {
        let account_number = account.account_number();

        // Use entry API for atomic check-and-insert to prevent race conditions
        match self.accounts.entry(account_number) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateAccount(account_number)),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    /// Retrieves a previously registered account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if no account exists for the
    /// given number.
    pub fn get_account(
        &self,
        account_number: AccountNumber,
    ) -> Result<dashmap::mapref::one::Ref<'_, AccountNumber, Account>, LedgerError> {
        self.accounts
            .get(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    /// Retrieves a mutable reference to a registered account.
    ///
    /// The returned guard holds a shard lock; drop it before touching the
    /// same account again.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if no account exists for the
    /// given number.
    pub fn get_account_mut(
        &self,
        account_number: AccountNumber,
    ) -> Result<dashmap::mapref::one::RefMut<'_, AccountNumber, Account>, LedgerError> {
        self.accounts
            .get_mut(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    /// Returns an iterator over all registered accounts.
    ///
    /// Useful for generating output reports of account states.
    pub fn accounts(
        &self,
    ) -> impl Iterator<Item = dashmap::mapref::multiple::RefMulti<'_, AccountNumber, Account>> {
        self.accounts.iter()
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
