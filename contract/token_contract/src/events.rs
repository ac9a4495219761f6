use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::MintRecord;

#[contracttype]
#[derive(Clone)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// The mint event carries the full audit record as its payload.
pub fn emit_mint(env: &Env, record: MintRecord) {
    env.events().publish((Symbol::new(env, "mint"),), record);
}

pub fn emit_transfer(env: &Env, event: TransferEvent) {
    env.events().publish((Symbol::new(env, "transfer"),), event);
}
