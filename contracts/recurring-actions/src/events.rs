//! Event schema for the recurring action contract.
//!
//! Topics are a fixed 2-tuple `(CONTRACT_TOPIC, op_topic)` so indexers can
//! filter on either element. These events and the current ledger snapshot
//! are the only audit trail; no execution history is stored.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ─── Topics ───────────────────────────────────────────────────────────────────

pub const CONTRACT_TOPIC: Symbol = symbol_short!("RECUR");

#[inline(always)] pub fn topic_created()  -> Symbol { symbol_short!("CREATED")  }
#[inline(always)] pub fn topic_executed() -> Symbol { symbol_short!("EXECUTED") }
#[inline(always)] pub fn topic_canceled() -> Symbol { symbol_short!("CANCELED") }
#[inline(always)] pub fn topic_permit()   -> Symbol { symbol_short!("PERMIT")   }

// ─── Event payloads ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionCreatedEventData {
    pub owner:     Address,
    pub index:     u64,
    pub recipient: Address,
    pub amount:    i128,
    pub frequency: u64,
}

/// Emitted by both execution paths.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionExecutedEventData {
    pub owner: Address,
    pub index: u64,
}

/// Emitted on every cancel call, including repeat cancels of an empty slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionCanceledEventData {
    pub owner: Address,
    pub index: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermitTransferEventData {
    pub token:    Address,
    pub payer:    Address,
    pub receiver: Address,
    pub amount:   i128,
}

// ─── Emit helpers ─────────────────────────────────────────────────────────────

pub fn emit_created(env: &Env, data: ActionCreatedEventData) {
    validate_created_event(&data);
    env.events().publish((CONTRACT_TOPIC, topic_created()), data);
}

pub fn emit_executed(env: &Env, data: ActionExecutedEventData) {
    validate_index(data.index);
    env.events().publish((CONTRACT_TOPIC, topic_executed()), data);
}

pub fn emit_canceled(env: &Env, data: ActionCanceledEventData) {
    validate_index(data.index);
    env.events().publish((CONTRACT_TOPIC, topic_canceled()), data);
}

pub fn emit_permit_transfer(env: &Env, data: PermitTransferEventData) {
    validate_permit_transfer_event(&data);
    env.events().publish((CONTRACT_TOPIC, topic_permit()), data);
}

// ─── Validation ───────────────────────────────────────────────────────────────

#[inline]
pub fn validate_created_event(data: &ActionCreatedEventData) {
    validate_index(data.index);
    assert!(data.amount    > 0, "event validation: amount must be > 0");
    assert!(data.frequency > 0, "event validation: frequency must be > 0");
}

#[inline]
pub fn validate_permit_transfer_event(data: &PermitTransferEventData) {
    assert!(data.amount > 0, "event validation: permit amount must be > 0");
}

#[inline]
fn validate_index(index: u64) {
    assert!(index > 0, "event validation: index 0 is never assigned");
}
