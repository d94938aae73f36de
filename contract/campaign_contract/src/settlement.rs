use soroban_sdk::{panic_with_error, symbol_short, token, Address, Env, Vec};

use crate::ledger;
use crate::storage_types::{Error, FailedTransfer, SettlementReport};

/// Refund every contributor with a non-zero balance.
///
/// Each balance is zeroed *before* its transfer is attempted, so a
/// reentrant call from the transfer target cannot settle the same
/// contributor twice. A failed transfer is contained by the host,
/// recorded in the report, and the iteration continues: one bad
/// recipient never blocks the rest of the batch.
pub fn distribute_all(env: &Env, token: &Address) -> SettlementReport {
    let client = token::Client::new(env, token);
    let from = env.current_contract_address();
    let mut report = SettlementReport {
        settled: 0,
        total_settled: 0,
        failures: Vec::new(env),
    };

    for contributor in ledger::contributors(env).iter() {
        let amount = ledger::settle(env, &contributor);
        if amount == 0 {
            continue;
        }
        match client.try_transfer(&from, &contributor, &amount) {
            Ok(_) => {
                report.settled += 1;
                report.total_settled += amount;
            }
            Err(error) => {
                let reason = match error {
                    Ok(_) => symbol_short!("rejected"), // the token contract refused
                    Err(_) => symbol_short!("invoke"),  // the call itself failed
                };
                report.failures.push_back(FailedTransfer {
                    contributor: contributor.clone(),
                    amount,
                    reason,
                });
            }
        }
    }

    report
}

/// Settle and transfer for exactly one contributor. A zero balance is a
/// no-op success returning 0. A failed transfer panics, which rolls the
/// settle back and leaves the balance claimable on retry.
pub fn refund_one(env: &Env, token: &Address, contributor: &Address) -> i128 {
    let amount = ledger::settle(env, contributor);
    if amount == 0 {
        return 0;
    }
    let client = token::Client::new(env, token);
    if client
        .try_transfer(&env.current_contract_address(), contributor, &amount)
        .is_err()
    {
        panic_with_error!(env, Error::TransferFailed);
    }
    amount
}

/// Single transfer of the pooled funds to the owner. Failure panics and
/// leaves state unchanged; the caller zeroes the withdrawable amount only
/// after success.
pub fn withdraw_to_owner(env: &Env, token: &Address, owner: &Address, amount: i128) {
    let client = token::Client::new(env, token);
    if client
        .try_transfer(&env.current_contract_address(), owner, &amount)
        .is_err()
    {
        panic_with_error!(env, Error::TransferFailed);
    }
}
