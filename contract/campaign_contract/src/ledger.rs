use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::storage_types::{Error, PersistentKey, TTL_PERSISTENT};

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Add `amount` to the contributor's cumulative total and return the old
/// and new totals, so the caller can compute credential counts without a
/// second lookup. Registers the contributor in the index on their
/// first-ever contribution.
pub fn record(env: &Env, contributor: &Address, amount: i128) -> (i128, i128) {
    let key = PersistentKey::Contribution(contributor.clone());
    let first = !env.storage().persistent().has(&key);
    let old_total: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    let new_total = old_total
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));

    env.storage().persistent().set(&key, &new_total);
    extend_persistent(env, &key);

    if first {
        let mut index: Vec<Address> = env
            .storage()
            .persistent()
            .get(&PersistentKey::Contributors)
            .unwrap_or(Vec::new(env));
        index.push_back(contributor.clone());
        env.storage()
            .persistent()
            .set(&PersistentKey::Contributors, &index);
        extend_persistent(env, &PersistentKey::Contributors);
    }

    (old_total, new_total)
}

/// Return the contributor's balance and zero it. Idempotent: a repeat
/// call returns 0 and writes nothing.
pub fn settle(env: &Env, contributor: &Address) -> i128 {
    let key = PersistentKey::Contribution(contributor.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if balance > 0 {
        env.storage().persistent().set(&key, &0i128);
        extend_persistent(env, &key);
    }
    balance
}

pub fn balance_of(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

/// Append-only index of distinct contributors, in first-contribution order.
pub fn contributors(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contributors)
        .unwrap_or(Vec::new(env))
}

/// O(n) sum of unsettled balances. Diagnostic only; `Campaign.raised` is
/// the cached total used on decision paths.
pub fn total_outstanding(env: &Env) -> i128 {
    let mut sum: i128 = 0;
    for contributor in contributors(env).iter() {
        sum += balance_of(env, &contributor);
    }
    sum
}
