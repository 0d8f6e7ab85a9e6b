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

//! Benchmarks for the account ledger.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded deposit and withdrawal processing
//! - Account lookup
//! - Scaling with number of accounts
//! - Multi-threaded concurrent deposits

use account_ledger_rs::{Account, AccountNumber, AccountStore, Teller};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rayon::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn store_with_accounts(count: u32) -> AccountStore {
    let store = AccountStore::new();
    for i in 0..count {
        let mut account = Account::new(AccountNumber(i));
        account.set_total_amount(Decimal::new(1_000_000, 4));
        store.add_account(account).unwrap();
    }
    store
}

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_single_deposit(c: &mut Criterion) {
    c.bench_function("single_deposit", |b| {
        let store = store_with_accounts(1);
        let teller = Teller::new(&store);
        b.iter(|| {
            teller
                .deposit(black_box(Decimal::new(10000, 4)), AccountNumber(0))
                .unwrap();
        })
    });
}

fn bench_single_withdrawal(c: &mut Criterion) {
    c.bench_function("single_withdrawal", |b| {
        let store = store_with_accounts(1);
        let teller = Teller::new(&store);
        b.iter(|| {
            teller
                .withdraw(black_box(Decimal::new(10000, 4)), AccountNumber(0))
                .unwrap();
        })
    });
}

fn bench_account_lookup(c: &mut Criterion) {
    c.bench_function("account_lookup", |b| {
        let store = store_with_accounts(1000);
        b.iter(|| {
            let account = store.get_account(black_box(AccountNumber(500))).unwrap();
            black_box(account.total_amount());
        })
    });
}

// =============================================================================
// Scaling Benchmarks
// =============================================================================

fn bench_deposit_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit_scaling");

    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let store = store_with_accounts(size);
            let teller = Teller::new(&store);
            b.iter(|| {
                for i in 0..size {
                    teller.deposit(Decimal::ONE, AccountNumber(i)).unwrap();
                }
            })
        });
    }

    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_concurrent_deposits(c: &mut Criterion) {
    c.bench_function("concurrent_deposits", |b| {
        let store = store_with_accounts(1000);
        b.iter(|| {
            (0..1000u32).into_par_iter().for_each(|i| {
                let teller = Teller::new(&store);
                teller.deposit(Decimal::ONE, AccountNumber(i)).unwrap();
            });
        })
    });
}

criterion_group!(
    benches,
    bench_single_deposit,
    bench_single_withdrawal,
    bench_account_lookup,
    bench_deposit_scaling,
    bench_concurrent_deposits
);
criterion_main!(benches);
