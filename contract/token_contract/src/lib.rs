#![no_std]

mod amount;
mod events;
mod storage_types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage_types::{
    DataKey, MintRecord, PersistentKey, TokenError, TTL_INSTANCE, TTL_PERSISTENT,
};

#[contract]
pub struct TokenContract;

#[contractimpl]
impl TokenContract {
    /// Initialize the contract with the minting authority
    pub fn initialize(env: Env, admin: Address) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        extend_instance(&env);
        Ok(())
    }

    /// Credit `amount` to `wallet` and record the mint under `token_hash`.
    /// The hash doubles as an idempotency key: minting twice under the
    /// same hash fails instead of re-crediting the balance.
    pub fn mint(
        env: Env,
        wallet: Address,
        amount: String,
        token_hash: String,
    ) -> Result<(), TokenError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TokenError::NotInitialized)?;
        admin.require_auth();

        let minted = amount::parse(&amount).ok_or(TokenError::InvalidAmount)?;

        let record_key = PersistentKey::MintRecord(token_hash.clone());
        if env.storage().persistent().has(&record_key) {
            return Err(TokenError::MintAlreadyRecorded);
        }

        let record = MintRecord {
            wallet: wallet.clone(),
            amount: minted,
            token_hash,
            minted_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&record_key, &record);
        extend_persistent(&env, &record_key);

        let balance_key = PersistentKey::Balance(wallet);
        let balance: i128 = env.storage().persistent().get(&balance_key).unwrap_or(0);
        let new_balance = balance
            .checked_add(minted)
            .ok_or(TokenError::BalanceOverflow)?;
        env.storage().persistent().set(&balance_key, &new_balance);
        extend_persistent(&env, &balance_key);
        extend_instance(&env);

        events::emit_mint(&env, record);
        Ok(())
    }

    /// Move `amount` from one wallet to another
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: String,
    ) -> Result<(), TokenError> {
        from.require_auth();

        let value = amount::parse(&amount).ok_or(TokenError::InvalidAmount)?;
        if value == 0 {
            return Err(TokenError::InvalidAmount);
        }
        if from == to {
            return Err(TokenError::SelfTransfer);
        }

        let from_key = PersistentKey::Balance(from.clone());
        let from_balance: i128 = env.storage().persistent().get(&from_key).unwrap_or(0);
        if from_balance < value {
            return Err(TokenError::InsufficientBalance);
        }

        let to_key = PersistentKey::Balance(to.clone());
        let to_balance: i128 = env.storage().persistent().get(&to_key).unwrap_or(0);
        let credited = to_balance
            .checked_add(value)
            .ok_or(TokenError::BalanceOverflow)?;

        env.storage().persistent().set(&from_key, &(from_balance - value));
        env.storage().persistent().set(&to_key, &credited);
        extend_persistent(&env, &from_key);
        extend_persistent(&env, &to_key);

        events::emit_transfer(
            &env,
            events::TransferEvent {
                from,
                to,
                amount: value,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Current balance of `wallet` as a decimal string, `"0"` if the
    /// wallet has never been credited
    pub fn balance_of(env: Env, wallet: Address) -> String {
        match env
            .storage()
            .persistent()
            .get::<PersistentKey, i128>(&PersistentKey::Balance(wallet))
        {
            Some(balance) => amount::format(&env, balance),
            None => String::from_str(&env, "0"),
        }
    }

    /// Audit lookup of the mint recorded under `token_hash`
    pub fn get_mint_record(env: Env, token_hash: String) -> Option<MintRecord> {
        env.storage()
            .persistent()
            .get(&PersistentKey::MintRecord(token_hash))
    }

    pub fn get_admin(env: Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(TokenError::NotInitialized)
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
