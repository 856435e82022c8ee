use soroban_sdk::{contracterror, contracttype, Address};

/// Instance entries are bumped to roughly 30 days once below ~7 days left.
pub const INSTANCE_TTL_THRESHOLD: u32 = 120_960;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

/// Action slots live longer than the instance; a monthly action must
/// survive at least one full period untouched.
pub const ACTION_TTL_THRESHOLD: u32 = 518_400;
pub const ACTION_TTL_EXTEND_TO: u32 = 1_036_800;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    /// Global index counter shared by every owner.
    ActionCount,
    /// (owner, index) -> Action
    Action(Address, u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Asset contract used for the direct-value execution path.
    pub native_token: Address,
    /// External service that verifies signed transfer intents.
    pub signature_transfer: Address,
    /// External relay that moves the bridge token to the destination network.
    pub relay: Address,
    pub bridge_token: Address,
    pub destination_chain_id: u64,
}

/// A registered recurring transfer authorization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Action {
    pub token: Address,
    pub recipient: Address,
    pub amount: i128,
    /// Seconds added to `next_execution` after each execution.
    pub frequency: u64,
    /// Ledger timestamp before which execution is rejected.
    pub next_execution: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    InvalidIndex = 4,
    ActionNotFound = 5,
    TooEarly = 6,
    AmountMismatch = 7,
    TransferFailed = 8,
    AuthorizationRejected = 9,
    RelayRejected = 10,
    ScheduleOverflow = 11,
}
