use soroban_sdk::{contracterror, contracttype, Address, Symbol, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
    Contributors,
}

// Campaign status
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Closed,
}

// Campaign details
#[derive(Clone)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,              // Asset contributions are denominated in
    pub credential: Address,         // Credential issuer contract
    pub goal: i128,
    pub raised: i128,                // Running total of all contributions
    pub withdrawable: i128,          // Set once at successful close, drained by withdraw
    pub credentials_issued: u64,
    pub created_at: u64,
    pub deadline: u64,               // created_at + duration, fixed at initialization
    pub status: CampaignStatus,
}

// One entry per transfer that failed inside a settlement batch
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FailedTransfer {
    pub contributor: Address,
    pub amount: i128,
    pub reason: Symbol,
}

// Outcome of a refund-all batch
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SettlementReport {
    pub settled: u32,
    pub total_settled: i128,
    pub failures: Vec<FailedTransfer>,
}

// Custom error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    CampaignClosed = 4,
    CampaignStillActive = 5,
    CampaignSucceeded = 6,
    GoalNotReached = 7,
    NothingToWithdraw = 8,
    InvalidGoal = 9,
    InvalidDuration = 10,
    AmountBelowMinimum = 11,
    TransferFailed = 12,
    IssuanceFailed = 13,
    Overflow = 14,
}

// Constants
pub const MIN_CONTRIBUTION: i128 = 1_000_000; // 0.1 token minimum (in stroops)
pub const CREDENTIAL_UNIT: i128 = 10_000_000; // one credential per whole token contributed
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
