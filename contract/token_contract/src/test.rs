#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn create_token_contract<'a>(env: &Env) -> TokenContractClient<'a> {
    TokenContractClient::new(env, &env.register(TokenContract, ()))
}

fn setup<'a>(env: &Env) -> (TokenContractClient<'a>, Address) {
    let admin = Address::generate(env);
    let contract = create_token_contract(env);
    contract.initialize(&admin);
    (contract, admin)
}

#[test]
fn test_balance_of_unminted_wallet_is_zero() {
    let env = Env::default();
    let contract = create_token_contract(&env);
    let wallet = Address::generate(&env);

    assert_eq!(contract.balance_of(&wallet), String::from_str(&env, "0"));
}

#[test]
fn test_double_initialization_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let other = Address::generate(&env);

    let result = contract.try_initialize(&other);
    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
}

#[test]
fn test_mint_requires_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let contract = create_token_contract(&env);
    let wallet = Address::generate(&env);

    let result = contract.try_mint(
        &wallet,
        &String::from_str(&env, "5"),
        &String::from_str(&env, "hash-1"),
    );
    assert_eq!(result, Err(Ok(TokenError::NotInitialized)));
}

#[test]
fn test_mint_credits_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);

    contract.mint(
        &wallet,
        &String::from_str(&env, "10.000001"),
        &String::from_str(&env, "hash-1"),
    );

    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "10.000001")
    );
}

#[test]
fn test_mint_accumulates() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);

    contract.mint(
        &wallet,
        &String::from_str(&env, "1.5"),
        &String::from_str(&env, "hash-1"),
    );
    contract.mint(
        &wallet,
        &String::from_str(&env, "2.25"),
        &String::from_str(&env, "hash-2"),
    );

    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "3.750000")
    );
}

// Amounts carry exactly six fractional digits; the seventh digit rounds
// half-up and everything finer is dropped.
#[test]
fn test_mint_rounds_beyond_six_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);

    contract.mint(
        &wallet,
        &String::from_str(&env, "10.000001"),
        &String::from_str(&env, "hash-1"),
    );
    contract.mint(
        &wallet,
        &String::from_str(&env, "0.0000004"),
        &String::from_str(&env, "hash-2"),
    );
    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "10.000001")
    );

    contract.mint(
        &wallet,
        &String::from_str(&env, "0.0000005"),
        &String::from_str(&env, "hash-3"),
    );
    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "10.000002")
    );
}

#[test]
fn test_mint_rejects_malformed_amounts() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);
    let hash = String::from_str(&env, "hash-1");

    for bad in ["", "-5", "1.2.3", "12a", "."] {
        let result = contract.try_mint(&wallet, &String::from_str(&env, bad), &hash);
        assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
    }
}

#[test]
fn test_mint_duplicate_hash_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);
    let hash = String::from_str(&env, "hash-1");

    contract.mint(&wallet, &String::from_str(&env, "10"), &hash);
    let result = contract.try_mint(&wallet, &String::from_str(&env, "10"), &hash);
    assert_eq!(result, Err(Ok(TokenError::MintAlreadyRecorded)));

    // The balance was credited exactly once.
    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "10.000000")
    );
}

#[test]
fn test_mint_record_lookup() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);
    let hash = String::from_str(&env, "hash-1");

    contract.mint(&wallet, &String::from_str(&env, "7.25"), &hash);

    let record = contract.get_mint_record(&hash).unwrap();
    assert_eq!(record.wallet, wallet);
    assert_eq!(record.amount, 7_250_000);
    assert_eq!(record.token_hash, hash);

    let unknown = String::from_str(&env, "hash-unknown");
    assert!(contract.get_mint_record(&unknown).is_none());
}

#[test]
fn test_transfer_moves_balance_and_conserves_total() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let sender = Address::generate(&env);
    let receiver = Address::generate(&env);

    contract.mint(
        &sender,
        &String::from_str(&env, "100"),
        &String::from_str(&env, "hash-1"),
    );
    contract.transfer(&sender, &receiver, &String::from_str(&env, "40.5"));

    assert_eq!(
        contract.balance_of(&sender),
        String::from_str(&env, "59.500000")
    );
    assert_eq!(
        contract.balance_of(&receiver),
        String::from_str(&env, "40.500000")
    );
}

#[test]
fn test_transfer_full_balance_leaves_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let sender = Address::generate(&env);
    let receiver = Address::generate(&env);

    contract.mint(
        &sender,
        &String::from_str(&env, "5"),
        &String::from_str(&env, "hash-1"),
    );
    contract.transfer(&sender, &receiver, &String::from_str(&env, "5"));

    // A drained wallet formats as an explicit zero balance, unlike a
    // wallet that was never credited.
    assert_eq!(
        contract.balance_of(&sender),
        String::from_str(&env, "0.000000")
    );
    assert_eq!(
        contract.balance_of(&receiver),
        String::from_str(&env, "5.000000")
    );
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let sender = Address::generate(&env);
    let receiver = Address::generate(&env);

    contract.mint(
        &sender,
        &String::from_str(&env, "10"),
        &String::from_str(&env, "hash-1"),
    );

    let result = contract.try_transfer(&sender, &receiver, &String::from_str(&env, "10.000001"));
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));

    // Neither side moved.
    assert_eq!(
        contract.balance_of(&sender),
        String::from_str(&env, "10.000000")
    );
    assert_eq!(contract.balance_of(&receiver), String::from_str(&env, "0"));
}

#[test]
fn test_transfer_rejects_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let sender = Address::generate(&env);
    let receiver = Address::generate(&env);

    contract.mint(
        &sender,
        &String::from_str(&env, "10"),
        &String::from_str(&env, "hash-1"),
    );

    let result = contract.try_transfer(&sender, &receiver, &String::from_str(&env, "0"));
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));

    // Quantizes to zero micro-units, so it is rejected the same way.
    let result = contract.try_transfer(&sender, &receiver, &String::from_str(&env, "0.0000004"));
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

#[test]
fn test_transfer_rejects_self_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, _) = setup(&env);
    let wallet = Address::generate(&env);

    contract.mint(
        &wallet,
        &String::from_str(&env, "10"),
        &String::from_str(&env, "hash-1"),
    );

    let result = contract.try_transfer(&wallet, &wallet, &String::from_str(&env, "1"));
    assert_eq!(result, Err(Ok(TokenError::SelfTransfer)));
    assert_eq!(
        contract.balance_of(&wallet),
        String::from_str(&env, "10.000000")
    );
}

#[test]
fn test_get_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let (contract, admin) = setup(&env);
    assert_eq!(contract.get_admin(), admin);

    let uninitialized = create_token_contract(&env);
    let result = uninitialized.try_get_admin();
    assert_eq!(result, Err(Ok(TokenError::NotInitialized)));
}
