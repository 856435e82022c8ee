//! Bridge relay adapter.
//!
//! Fire-and-forget dispatch of the configured bridge token to the single
//! configured destination network. Delivery, retries and refunds are the
//! relay's business; the contract's job ends once the relay accepts.

use soroban_sdk::{contractclient, contracttype, log, Address, Env};

use crate::types::{Config, Error};

/// Deposit request as understood by the external relay.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRequest {
    /// Account the relay pulls `amount` from.
    pub depositor: Address,
    /// Receiver on the destination network.
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
    pub destination_chain_id: u64,
    /// Fee paid to relayers, 1e18 = 100%.
    pub relayer_fee_pct: i64,
    /// Timestamp the relay prices its fee against.
    pub quote_timestamp: u64,
}

#[contractclient(name = "RelayClient")]
pub trait Relay {
    fn deposit(env: Env, request: DepositRequest);
}

pub fn relay_to_destination(
    env: &Env,
    config: &Config,
    sender: Address,
    receiver: Address,
    amount: i128,
    relayer_fee_pct: i64,
) -> Result<(), Error> {
    if !shared::is_positive_amount(amount) {
        return Err(Error::InvalidInput);
    }

    let request = DepositRequest {
        depositor: sender,
        recipient: receiver,
        token: config.bridge_token.clone(),
        amount,
        destination_chain_id: config.destination_chain_id,
        relayer_fee_pct,
        quote_timestamp: env.ledger().timestamp(),
    };

    let outcome = RelayClient::new(env, &config.relay).try_deposit(&request);
    if !matches!(outcome, Ok(Ok(()))) {
        log!(env, "relay rejected deposit", request.depositor, amount);
        return Err(Error::RelayRejected);
    }

    log!(
        env,
        "relay accepted deposit",
        request.recipient,
        amount,
        config.destination_chain_id
    );
    Ok(())
}
