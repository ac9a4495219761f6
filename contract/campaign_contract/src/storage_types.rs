use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    CampaignIds,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(String),
    CampaignVersionCount(String),
    CampaignVersion(String, u32),
    Donation(String, String, u64),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Open,
    Completed,
    Cancelled,
}

/// How `get_campaign_history` replays version snapshots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum HistoryMode {
    /// Every snapshot contributes its full donor list, so a donor shows
    /// up once per version it is embedded in.
    Cumulative,
    /// Each snapshot contributes only the donors appended at that version.
    Delta,
}

/// One entry in a campaign's embedded donor sequence. Append-only: never
/// removed or mutated after the donate call that wrote it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub amount: i128,
    pub donated_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: Address,
    pub goal: i128,
    pub raised: i128,
    pub status: CampaignStatus,
    pub created_at: u64,
    pub updated_at: u64,
    pub donors: Vec<Donor>,
}

/// Standalone donation record, written once per donate call and keyed by
/// campaign, donor, and ledger second. A same-second repeat donation by
/// one donor overwrites this record; the embedded donor sequence is the
/// authoritative accounting trail.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donation {
    pub campaign_id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub amount: i128,
    pub donated_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    CampaignNotFound = 1,
    CampaignAlreadyExists = 2,
    CampaignNotOpen = 3,
    InvalidAmount = 4,
    AmountOverflow = 5,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
