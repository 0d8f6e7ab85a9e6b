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

//! Error types for ledger operations.

use crate::base::AccountNumber;
use thiserror::Error;

/// Ledger operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Referenced account number is not registered in the store
    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),

    /// Account number is already registered
    #[error("account {0} already registered")]
    DuplicateAccount(AccountNumber),
}

#[cfg(test)]
mod tests {
    use super::LedgerError;
    use crate::base::AccountNumber;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            LedgerError::AccountNotFound(AccountNumber(123)).to_string(),
            "account 123 not found"
        );
        assert_eq!(
            LedgerError::DuplicateAccount(AccountNumber(7)).to_string(),
            "account 7 already registered"
        );
    }

    #[test]
    fn errors_are_cloneable() {
        let error = LedgerError::AccountNotFound(AccountNumber(1));
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
