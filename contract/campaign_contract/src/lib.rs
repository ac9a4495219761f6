#![no_std]

mod amount;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use storage_types::{
    Campaign, CampaignError, CampaignStatus, DataKey, Donation, Donor, HistoryMode,
    PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Seed the ledger with two example campaigns for first-time
    /// bootstrap. A campaign that already exists is left untouched, so
    /// repeating the call never resets live state.
    pub fn init_ledger(env: Env, owner: Address) {
        owner.require_auth();

        seed_campaign(
            &env,
            &owner,
            "campaign-001",
            "Meals for children",
            "Warm meals for children in underserved districts",
            10_000_000,
        );
        seed_campaign(
            &env,
            &owner,
            "campaign-002",
            "School construction",
            "A new school building for a remote village",
            50_000_000,
        );
    }

    /// Register a new campaign with a zero raised total and an empty
    /// donor sequence
    pub fn create_campaign(
        env: Env,
        id: String,
        name: String,
        description: String,
        owner: Address,
        goal: String,
    ) -> Result<(), CampaignError> {
        owner.require_auth();

        if env
            .storage()
            .persistent()
            .has(&PersistentKey::Campaign(id.clone()))
        {
            return Err(CampaignError::CampaignAlreadyExists);
        }

        let goal_value = amount::parse(&goal).ok_or(CampaignError::InvalidAmount)?;
        if goal_value == 0 {
            return Err(CampaignError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let campaign = Campaign {
            id: id.clone(),
            name,
            description,
            owner,
            goal: goal_value,
            raised: 0,
            status: CampaignStatus::Open,
            created_at: now,
            updated_at: now,
            donors: Vec::new(&env),
        };

        register_campaign_id(&env, &id);
        write_campaign(&env, &campaign);
        Ok(())
    }

    /// Record a donation: append the donor to the campaign, bump the
    /// raised total, and write the standalone donation record. Flips the
    /// campaign to Completed when the goal is reached by this donation.
    pub fn donate(
        env: Env,
        campaign_id: String,
        donor_id: String,
        donor_name: String,
        amount: String,
    ) -> Result<(), CampaignError> {
        let mut campaign = load_campaign(&env, &campaign_id)?;
        if campaign.status != CampaignStatus::Open {
            return Err(CampaignError::CampaignNotOpen);
        }

        let value = amount::parse(&amount).ok_or(CampaignError::InvalidAmount)?;
        if value == 0 {
            return Err(CampaignError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        campaign.raised = campaign
            .raised
            .checked_add(value)
            .ok_or(CampaignError::AmountOverflow)?;
        campaign.updated_at = now;
        campaign.donors.push_back(Donor {
            id: donor_id.clone(),
            name: donor_name.clone(),
            amount: value,
            donated_at: now,
        });
        if campaign.raised >= campaign.goal {
            campaign.status = CampaignStatus::Completed;
        }
        write_campaign(&env, &campaign);

        let donation = Donation {
            campaign_id: campaign_id.clone(),
            donor_id: donor_id.clone(),
            donor_name,
            amount: value,
            donated_at: now,
        };
        let donation_key = PersistentKey::Donation(campaign_id, donor_id, now);
        env.storage().persistent().set(&donation_key, &donation);
        extend_persistent(&env, &donation_key);
        Ok(())
    }

    pub fn query_campaign(env: Env, id: String) -> Result<Campaign, CampaignError> {
        load_campaign(&env, &id)
    }

    /// Every campaign on the ledger. Donation records live under their
    /// own key variant and can never appear here.
    pub fn query_all_campaigns(env: Env) -> Vec<Campaign> {
        let ids = campaign_ids(&env);
        let mut campaigns = Vec::new(&env);
        for id in ids.iter() {
            if let Some(campaign) = env
                .storage()
                .persistent()
                .get::<PersistentKey, Campaign>(&PersistentKey::Campaign(id))
            {
                campaigns.push_back(campaign);
            }
        }
        campaigns
    }

    pub fn campaign_exists(env: Env, id: String) -> bool {
        env.storage()
            .persistent()
            .has(&PersistentKey::Campaign(id))
    }

    /// Replay the version history of a campaign as donation records,
    /// oldest version first.
    ///
    /// Snapshots are cumulative: version n embeds every donor appended up
    /// to that point. `Cumulative` mode re-emits each snapshot's entire
    /// donor list and therefore inflates counts across versions; `Delta`
    /// mode emits only the donors a version added, reconstructing the
    /// exact donation sequence.
    pub fn get_campaign_history(
        env: Env,
        campaign_id: String,
        mode: HistoryMode,
    ) -> Result<Vec<Donation>, CampaignError> {
        if !env
            .storage()
            .persistent()
            .has(&PersistentKey::Campaign(campaign_id.clone()))
        {
            return Err(CampaignError::CampaignNotFound);
        }

        let versions: u32 = env
            .storage()
            .persistent()
            .get(&PersistentKey::CampaignVersionCount(campaign_id.clone()))
            .unwrap_or(0);

        let mut donations = Vec::new(&env);
        let mut replayed: u32 = 0;
        for version in 0..versions {
            let snapshot: Campaign = env
                .storage()
                .persistent()
                .get(&PersistentKey::CampaignVersion(campaign_id.clone(), version))
                .ok_or(CampaignError::CampaignNotFound)?;

            let start = match mode {
                HistoryMode::Cumulative => 0,
                HistoryMode::Delta => replayed,
            };
            replayed = snapshot.donors.len();
            for donor in snapshot.donors.iter().skip(start as usize) {
                donations.push_back(Donation {
                    campaign_id: campaign_id.clone(),
                    donor_id: donor.id,
                    donor_name: donor.name,
                    amount: donor.amount,
                    donated_at: donor.donated_at,
                });
            }
        }
        Ok(donations)
    }

    /// Overwrite the campaign status unconditionally. There is no
    /// terminal state: a Completed campaign can be reopened.
    pub fn update_campaign_status(
        env: Env,
        campaign_id: String,
        status: CampaignStatus,
    ) -> Result<(), CampaignError> {
        let mut campaign = load_campaign(&env, &campaign_id)?;
        campaign.owner.require_auth();

        campaign.status = status;
        campaign.updated_at = env.ledger().timestamp();
        write_campaign(&env, &campaign);
        Ok(())
    }

    /// Sum of raised totals across all campaigns, as a decimal string
    pub fn get_total_donations(env: Env) -> Result<String, CampaignError> {
        let mut total: i128 = 0;
        for campaign in Self::query_all_campaigns(env.clone()).iter() {
            total = total
                .checked_add(campaign.raised)
                .ok_or(CampaignError::AmountOverflow)?;
        }
        Ok(amount::format(&env, total))
    }

    /// Audit lookup of the standalone donation record written at
    /// `donated_at` ledger seconds
    pub fn get_donation(
        env: Env,
        campaign_id: String,
        donor_id: String,
        donated_at: u64,
    ) -> Option<Donation> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Donation(campaign_id, donor_id, donated_at))
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn load_campaign(env: &Env, id: &String) -> Result<Campaign, CampaignError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id.clone()))
        .ok_or(CampaignError::CampaignNotFound)
}

fn campaign_ids(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&DataKey::CampaignIds)
        .unwrap_or_else(|| Vec::new(env))
}

fn register_campaign_id(env: &Env, id: &String) {
    let mut ids = campaign_ids(env);
    ids.push_back(id.clone());
    env.storage().instance().set(&DataKey::CampaignIds, &ids);
    extend_instance(env);
}

/// Write the campaign document and append the matching version snapshot.
/// The snapshot sequence is what makes history replay possible.
fn write_campaign(env: &Env, campaign: &Campaign) {
    let doc_key = PersistentKey::Campaign(campaign.id.clone());
    env.storage().persistent().set(&doc_key, campaign);
    extend_persistent(env, &doc_key);

    let count_key = PersistentKey::CampaignVersionCount(campaign.id.clone());
    let version: u32 = env.storage().persistent().get(&count_key).unwrap_or(0);
    let version_key = PersistentKey::CampaignVersion(campaign.id.clone(), version);
    env.storage().persistent().set(&version_key, campaign);
    env.storage().persistent().set(&count_key, &(version + 1));
    extend_persistent(env, &version_key);
    extend_persistent(env, &count_key);
}

fn seed_campaign(
    env: &Env,
    owner: &Address,
    id: &str,
    name: &str,
    description: &str,
    goal: i128,
) {
    let id = String::from_str(env, id);
    if env
        .storage()
        .persistent()
        .has(&PersistentKey::Campaign(id.clone()))
    {
        return;
    }

    let now = env.ledger().timestamp();
    let campaign = Campaign {
        id: id.clone(),
        name: String::from_str(env, name),
        description: String::from_str(env, description),
        owner: owner.clone(),
        goal: goal * amount::ONE,
        raised: 0,
        status: CampaignStatus::Open,
        created_at: now,
        updated_at: now,
        donors: Vec::new(env),
    };

    register_campaign_id(env, &id);
    write_campaign(env, &campaign);
}
