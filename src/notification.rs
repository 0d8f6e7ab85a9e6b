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

//! Notification dispatch.
//!
//! [`NotificationSender`] abstracts how a notification reaches its
//! recipient. Implementations are interchangeable; callers hold the trait,
//! never a concrete sender. Dispatch is fire-and-forget with no declared
//! failure mode, so the contract returns nothing.
//!
//! Three senders ship with the crate: [`EmailSender`] and [`SmsSender`]
//! write the dispatch to stdout, [`MemorySender`] records messages for
//! inspection.

use parking_lot::Mutex;

/// Capability to dispatch a notification message.
pub trait NotificationSender: Send + Sync {
    /// Dispatches a single notification carrying `message`.
    ///
    /// Each call produces one dispatch; there is no deduplication.
    fn send_notification(&self, message: &str);
}

/// Sends notifications over email.
///
/// Delivery is mocked: the dispatch is written to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailSender;

impl NotificationSender for EmailSender {
    fn send_notification(&self, message: &str) {
        println!("[email] {message}");
    }
}

/// Sends notifications over SMS.
///
/// Delivery is mocked: the dispatch is written to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsSender;

impl NotificationSender for SmsSender {
    fn send_notification(&self, message: &str) {
        println!("[sms] {message}");
    }
}

/// Records messages instead of delivering them.
///
/// Useful in tests and demos to observe exactly what was dispatched.
#[derive(Debug, Default)]
pub struct MemorySender {
    messages: Mutex<Vec<String>>,
}

impl MemorySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages dispatched so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl NotificationSender for MemorySender {
    fn send_notification(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
