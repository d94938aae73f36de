use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::SettlementReport;

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total: i128,
    pub credentials: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ClosedEvent {
    pub owner: Address,
    pub report: SettlementReport,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundedEvent {
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events()
        .publish((Symbol::new(env, "contributed"),), event);
}

pub fn emit_closed(env: &Env, event: ClosedEvent) {
    env.events().publish((Symbol::new(env, "closed"),), event);
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events().publish((Symbol::new(env, "refunded"),), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish((Symbol::new(env, "withdrawn"),), event);
}
