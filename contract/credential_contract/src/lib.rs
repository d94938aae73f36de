#![no_std]

mod storage_types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env};

pub use storage_types::Error;
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct CredentialContract;

#[contractimpl]
impl CredentialContract {
    /// Set the only address allowed to issue credentials, typically the
    /// campaign contract. Ids start at 1 and only increase.
    pub fn initialize(env: Env, minter: Address) {
        if env.storage().instance().has(&DataKey::Minter) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(&DataKey::NextId, &1u64);
        extend_instance(&env);
    }

    /// Issue the next sequentially-numbered credential to `to`.
    ///
    /// Only the minter may call this; a direct cross-contract invocation
    /// by the minter contract satisfies the auth check.
    pub fn issue(env: Env, to: Address) -> u64 {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        minter.require_auth();

        let id: u64 = env.storage().instance().get(&DataKey::NextId).unwrap();
        env.storage().instance().set(&DataKey::NextId, &(id + 1));

        let owner_key = PersistentKey::Owner(id);
        env.storage().persistent().set(&owner_key, &to);
        extend_persistent(&env, &owner_key);

        let balance_key = PersistentKey::Balance(to.clone());
        let balance: u32 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        env.storage().persistent().set(&balance_key, &(balance + 1));
        extend_persistent(&env, &balance_key);

        extend_instance(&env);

        env.events().publish((symbol_short!("issued"),), (id, to));

        id
    }

    /// View functions
    pub fn owner_of(env: Env, id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&PersistentKey::Owner(id))
            .unwrap_or_else(|| panic_with_error!(&env, Error::CredentialNotFound))
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&PersistentKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn total_issued(env: Env) -> u64 {
        let next: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextId)
            .unwrap_or(1u64);
        next - 1
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
