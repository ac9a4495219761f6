use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Balance(Address),
    MintRecord(String),
}

/// Audit record written once per mint, keyed by token hash. Immutable:
/// a second mint under the same hash is rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MintRecord {
    pub wallet: Address,
    pub amount: i128,
    pub token_hash: String,
    pub minted_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    SelfTransfer = 4,
    InsufficientBalance = 5,
    BalanceOverflow = 6,
    MintAlreadyRecorded = 7,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
