//! Action ledger: a global monotonic index counter plus per-owner slots.
//!
//! Indices are allocated from a single counter shared by every owner, then
//! stored under the creator's address. An index is never reused, even after
//! the slot is deleted.

use soroban_sdk::{Address, Env};

use crate::types::{
    Action, DataKey, Error, ACTION_TTL_EXTEND_TO, ACTION_TTL_THRESHOLD,
};

/// Highest index assigned so far (0 when nothing was ever created).
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ActionCount)
        .unwrap_or(0)
}

/// Fails with `InvalidIndex` unless `0 < index <= count`.
pub fn check_index(env: &Env, index: u64) -> Result<(), Error> {
    if shared::is_allocated_index(index, count(env)) {
        Ok(())
    } else {
        Err(Error::InvalidIndex)
    }
}

/// Validates and stores a new action, returning its global index.
///
/// The first due date is `now + frequency`. Nothing is written when
/// validation fails.
pub fn create(
    env: &Env,
    owner: &Address,
    token: Address,
    recipient: Address,
    amount: i128,
    frequency: u64,
) -> Result<u64, Error> {
    let this = env.current_contract_address();
    if !shared::is_positive_amount(amount)
        || !shared::is_valid_frequency(frequency)
        || token == this
        || recipient == this
    {
        return Err(Error::InvalidInput);
    }

    let next_execution = shared::first_due(env.ledger().timestamp(), frequency)
        .ok_or(Error::ScheduleOverflow)?;

    let index = count(env) + 1;
    let action = Action {
        token,
        recipient,
        amount,
        frequency,
        next_execution,
    };

    set(env, owner, index, &action);
    env.storage().instance().set(&DataKey::ActionCount, &index);

    Ok(index)
}

pub fn get(env: &Env, owner: &Address, index: u64) -> Option<Action> {
    env.storage()
        .persistent()
        .get(&DataKey::Action(owner.clone(), index))
}

pub fn set(env: &Env, owner: &Address, index: u64, action: &Action) {
    let key = DataKey::Action(owner.clone(), index);
    env.storage().persistent().set(&key, action);
    env.storage()
        .persistent()
        .extend_ttl(&key, ACTION_TTL_THRESHOLD, ACTION_TTL_EXTEND_TO);
}

/// Clears the slot. Deleting an empty slot is a no-op.
pub fn delete(env: &Env, owner: &Address, index: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Action(owner.clone(), index));
}
