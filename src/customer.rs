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

//! Customer purchase flow.
//!
//! A [`Customer`] depends on the [`NotificationSender`] abstraction alone;
//! the concrete sender is injected at construction and owned by the caller.

use crate::notification::NotificationSender;

const PURCHASE_MESSAGE: &str = "Thank you for your purchase";

/// A customer that thanks the buyer through whatever sender it was given.
pub struct Customer<'a> {
    notification_sender: &'a dyn NotificationSender,
}

impl<'a> Customer<'a> {
    /// Creates a customer using the given sender for notifications.
    pub fn new(notification_sender: &'a dyn NotificationSender) -> Self {
        Customer {
            notification_sender,
        }
    }

    /// Completes a purchase and dispatches a single thank-you notification.
    pub fn purchase_item(&self) {
        self.notification_sender.send_notification(PURCHASE_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::MemorySender;

    #[test]
    fn purchase_dispatches_thank_you() {
        let sender = MemorySender::new();
        let customer = Customer::new(&sender);

        customer.purchase_item();

        assert_eq!(sender.messages(), vec!["Thank you for your purchase"]);
    }
}
