#![no_std]

mod events;
mod ledger;
mod lifecycle;
mod settlement;
mod storage_types;


use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, token, Address, Env, Vec,
};

pub use storage_types::{
    Campaign, CampaignStatus, Error, FailedTransfer, SettlementReport, CREDENTIAL_UNIT,
    MIN_CONTRIBUTION,
};

/// Issues one globally-unique, sequentially-numbered credential per call.
#[contractclient(name = "CredentialIssuerClient")]
pub trait CredentialIssuer {
    fn issue(env: Env, to: Address) -> u64;
}

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Set up the campaign. Called once by the registry that deploys the
    /// contract; the deadline is fixed at creation time + `duration`.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        credential: Address,
        goal: i128,
        duration: u64,
    ) {
        if lifecycle::exists(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }
        if duration == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let created_at = env.ledger().timestamp();
        let campaign = Campaign {
            owner,
            token,
            credential,
            goal,
            raised: 0,
            withdrawable: 0,
            credentials_issued: 0,
            created_at,
            deadline: created_at + duration,
            status: CampaignStatus::Active,
        };
        lifecycle::save(&env, &campaign);
    }

    /// Contribute `amount` toward the goal.
    ///
    /// Pulls the tokens into escrow, issues one credential per whole unit
    /// the contributor's cumulative total crosses, and closes the campaign
    /// as successful the moment the goal is met. Returns the number of
    /// credentials issued for this contribution.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> u32 {
        contributor.require_auth();

        let mut campaign = lifecycle::load(&env);
        lifecycle::sync_expiry(&env, &mut campaign);
        if !lifecycle::is_active(&env, &campaign) {
            panic_with_error!(&env, Error::CampaignClosed);
        }
        if amount < MIN_CONTRIBUTION {
            panic_with_error!(&env, Error::AmountBelowMinimum);
        }

        // Pull the contribution into escrow.
        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let (old_total, new_total) = ledger::record(&env, &contributor, amount);
        campaign.raised = campaign
            .raised
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        // One credential per whole unit of cumulative contribution. An
        // issuance failure aborts the entire contribution, ledger update
        // included.
        let credentials = ((new_total / CREDENTIAL_UNIT) - (old_total / CREDENTIAL_UNIT)) as u32;
        if credentials > 0 {
            let issuer = CredentialIssuerClient::new(&env, &campaign.credential);
            for _ in 0..credentials {
                if issuer.try_issue(&contributor).is_err() {
                    panic_with_error!(&env, Error::IssuanceFailed);
                }
            }
            campaign.credentials_issued += credentials as u64;
        }

        if campaign.raised >= campaign.goal {
            campaign.status = CampaignStatus::Closed;
            campaign.withdrawable = campaign.raised;
        }
        lifecycle::save(&env, &campaign);

        events::emit_contributed(
            &env,
            events::ContributedEvent {
                contributor,
                amount,
                total: new_total,
                credentials,
            },
        );

        credentials
    }

    /// Owner-initiated close.
    ///
    /// Refunds every contributor regardless of goal progress. Individual
    /// transfer failures are recorded in the returned report, not raised,
    /// so one bad recipient cannot block the batch.
    pub fn close(env: Env, caller: Address) -> SettlementReport {
        caller.require_auth();

        let mut campaign = lifecycle::load(&env);
        lifecycle::sync_expiry(&env, &mut campaign);
        if caller != campaign.owner {
            panic_with_error!(&env, Error::NotAuthorized);
        }
        if !lifecycle::is_active(&env, &campaign) {
            panic_with_error!(&env, Error::CampaignClosed);
        }

        // Close before settling so nothing can contribute mid-batch.
        campaign.status = CampaignStatus::Closed;
        lifecycle::save(&env, &campaign);

        let report = settlement::distribute_all(&env, &campaign.token);
        events::emit_closed(
            &env,
            events::ClosedEvent {
                owner: campaign.owner,
                report: report.clone(),
            },
        );

        report
    }

    /// Self-service refund after a failed campaign.
    ///
    /// Transfers exactly the caller's recorded balance. Repeating the call
    /// with a zero balance is a no-op returning 0, never an error.
    pub fn refund(env: Env, contributor: Address) -> i128 {
        contributor.require_auth();

        let mut campaign = lifecycle::load(&env);
        lifecycle::sync_expiry(&env, &mut campaign);
        if !lifecycle::is_closed(&env, &campaign) {
            panic_with_error!(&env, Error::CampaignStillActive);
        }
        if lifecycle::is_successful(&campaign) {
            panic_with_error!(&env, Error::CampaignSucceeded);
        }

        let amount = settlement::refund_one(&env, &campaign.token, &contributor);
        if amount > 0 {
            events::emit_refunded(&env, events::RefundedEvent { contributor, amount });
        }

        amount
    }

    /// Pay the raised funds out to the owner of a successful campaign.
    ///
    /// The withdrawable amount is zeroed only after the transfer succeeds,
    /// so a failed transfer leaves state unchanged and the call can be
    /// retried. A second withdraw finds nothing left and is rejected.
    pub fn withdraw(env: Env, caller: Address) -> i128 {
        caller.require_auth();

        let mut campaign = lifecycle::load(&env);
        lifecycle::sync_expiry(&env, &mut campaign);
        if caller != campaign.owner {
            panic_with_error!(&env, Error::NotAuthorized);
        }
        if !lifecycle::is_closed(&env, &campaign) {
            panic_with_error!(&env, Error::CampaignStillActive);
        }
        if lifecycle::is_failed(&campaign) {
            panic_with_error!(&env, Error::GoalNotReached);
        }
        if campaign.withdrawable == 0 {
            panic_with_error!(&env, Error::NothingToWithdraw);
        }

        let amount = campaign.withdrawable;
        settlement::withdraw_to_owner(&env, &campaign.token, &campaign.owner, amount);
        campaign.withdrawable = 0;
        lifecycle::save(&env, &campaign);

        events::emit_withdrawn(
            &env,
            events::WithdrawnEvent {
                owner: campaign.owner,
                amount,
            },
        );

        amount
    }

    /// View functions
    pub fn get_campaign(env: Env) -> Campaign {
        lifecycle::load(&env)
    }

    pub fn contribution_of(env: Env, contributor: Address) -> i128 {
        ledger::balance_of(&env, &contributor)
    }

    pub fn contributors(env: Env) -> Vec<Address> {
        ledger::contributors(&env)
    }

    /// Diagnostic: O(n) sum of unsettled balances.
    pub fn total_outstanding(env: Env) -> i128 {
        ledger::total_outstanding(&env)
    }

    pub fn credentials_issued(env: Env) -> u64 {
        lifecycle::load(&env).credentials_issued
    }
}
