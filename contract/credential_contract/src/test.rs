#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn create_credential_contract<'a>(e: &Env) -> CredentialContractClient<'a> {
    CredentialContractClient::new(e, &e.register(CredentialContract, ()))
}

#[test]
fn test_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let minter = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.initialize(&minter);

    assert_eq!(contract.total_issued(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_initialize_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let minter = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.initialize(&minter);
    contract.initialize(&minter);
}

#[test]
fn test_issue_sequential_ids() {
    let env = Env::default();
    env.mock_all_auths();

    let minter = Address::generate(&env);
    let holder_a = Address::generate(&env);
    let holder_b = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.initialize(&minter);

    assert_eq!(contract.issue(&holder_a), 1);
    assert_eq!(contract.issue(&holder_a), 2);
    assert_eq!(contract.issue(&holder_b), 3);

    assert_eq!(contract.total_issued(), 3);
    assert_eq!(contract.balance_of(&holder_a), 2);
    assert_eq!(contract.balance_of(&holder_b), 1);
    assert_eq!(contract.owner_of(&1), holder_a);
    assert_eq!(contract.owner_of(&2), holder_a);
    assert_eq!(contract.owner_of(&3), holder_b);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_issue_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let holder = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.issue(&holder);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_owner_of_unknown_id() {
    let env = Env::default();
    env.mock_all_auths();

    let minter = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.initialize(&minter);
    contract.owner_of(&1);
}

#[test]
fn test_balance_of_unknown_holder() {
    let env = Env::default();
    env.mock_all_auths();

    let minter = Address::generate(&env);
    let stranger = Address::generate(&env);
    let contract = create_credential_contract(&env);

    contract.initialize(&minter);

    assert_eq!(contract.balance_of(&stranger), 0);
}
