use soroban_sdk::{panic_with_error, Env};

use crate::storage_types::{Campaign, CampaignStatus, DataKey, Error, TTL_INSTANCE};

pub fn save(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn load(env: &Env) -> Campaign {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn exists(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

/// Persist the deadline-driven transition. The deadline is evaluated
/// lazily at the start of each operation; no scheduler pushes it.
pub fn sync_expiry(env: &Env, campaign: &mut Campaign) {
    if campaign.status == CampaignStatus::Active && env.ledger().timestamp() >= campaign.deadline {
        campaign.status = CampaignStatus::Closed;
        save(env, campaign);
    }
}

pub fn is_active(env: &Env, campaign: &Campaign) -> bool {
    campaign.status == CampaignStatus::Active && env.ledger().timestamp() < campaign.deadline
}

pub fn is_closed(env: &Env, campaign: &Campaign) -> bool {
    campaign.status == CampaignStatus::Closed || env.ledger().timestamp() >= campaign.deadline
}

pub fn is_successful(campaign: &Campaign) -> bool {
    campaign.raised >= campaign.goal
}

pub fn is_failed(campaign: &Campaign) -> bool {
    !is_successful(campaign)
}
