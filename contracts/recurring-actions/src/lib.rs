#![no_std]

mod bridge;
mod events;
mod ledger;
mod permit;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use crate::bridge::DepositRequest;
pub use crate::events::{
    ActionCanceledEventData, ActionCreatedEventData, ActionExecutedEventData,
    PermitTransferEventData, CONTRACT_TOPIC,
};
pub use crate::permit::{PermitTransferFrom, SignatureTransferDetails, TokenPermissions};
pub use crate::types::{Action, Config, Error};

use crate::events::{emit_canceled, emit_created, emit_executed};
use crate::permit::PermitSignature;
use crate::types::{DataKey, INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD};
use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env};

#[contract]
pub struct RecurringActionsContract;

#[contractimpl]
impl RecurringActionsContract {
    /// One-time setup of the collaborating contracts.
    ///
    /// # Arguments
    /// * `admin`                - Address performing the setup (must authorize)
    /// * `native_token`         - Asset contract moved by `execute_action`
    /// * `signature_transfer`   - Service that redeems signed transfer intents
    /// * `relay`                - Relay used by `relay_to_destination`
    /// * `bridge_token`         - The only token the relay path will move
    /// * `destination_chain_id` - The only destination the relay path targets
    pub fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
        signature_transfer: Address,
        relay: Address,
        bridge_token: Address,
        destination_chain_id: u64,
    ) -> Result<(), Error> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }

        let config = Config {
            admin,
            native_token,
            signature_transfer,
            relay,
            bridge_token,
            destination_chain_id,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        bump_instance(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        load_config(&env)
    }

    /// Registers a recurring transfer owned by `owner`.
    ///
    /// # Arguments
    /// * `owner`     - The payer (must authorize)
    /// * `token`     - Token moved by the permit path
    /// * `recipient` - Receives every execution
    /// * `amount`    - Exact amount per execution (must be > 0)
    /// * `frequency` - Seconds between executions (must be > 0)
    ///
    /// # Returns
    /// The globally unique index; the first due date is `now + frequency`.
    pub fn create_action(
        env: Env,
        owner: Address,
        token: Address,
        recipient: Address,
        amount: i128,
        frequency: u64,
    ) -> Result<u64, Error> {
        owner.require_auth();

        let index = ledger::create(&env, &owner, token, recipient.clone(), amount, frequency)?;
        bump_instance(&env);

        log!(&env, "action created", owner.clone(), index);
        emit_created(
            &env,
            ActionCreatedEventData {
                owner,
                index,
                recipient,
                amount,
                frequency,
            },
        );

        Ok(index)
    }

    /// Returns `None` for slots that were never filled or have been canceled.
    pub fn get_action(env: Env, owner: Address, index: u64) -> Option<Action> {
        ledger::get(&env, &owner, index)
    }

    pub fn action_count(env: Env) -> u64 {
        ledger::count(&env)
    }

    /// Executes a due action by forwarding native value from `caller`.
    ///
    /// Anyone may trigger execution; the funds come from `caller`, who must
    /// attach exactly `action.amount`. The schedule advances by one
    /// `frequency` so the same due date cannot be paid twice.
    pub fn execute_action(
        env: Env,
        caller: Address,
        owner: Address,
        index: u64,
        value: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = load_config(&env)?;
        let mut action = load_due_action(&env, &owner, index)?;

        if value != action.amount {
            return Err(Error::AmountMismatch);
        }

        let native = token::Client::new(&env, &config.native_token);
        if !matches!(native.try_transfer(&caller, &action.recipient, &value), Ok(Ok(()))) {
            log!(&env, "native transfer failed", owner.clone(), index);
            return Err(Error::TransferFailed);
        }

        advance(&env, &owner, index, &mut action)?;
        emit_executed(&env, ActionExecutedEventData { owner, index });

        Ok(())
    }

    /// Executes a due action by redeeming the payer's signed transfer intent.
    ///
    /// Permissionless: authority to move funds comes from `signature`, not
    /// from the caller. On success the due date moves forward by exactly one
    /// `frequency` from its previous value.
    pub fn execute_action_with_permit(
        env: Env,
        owner: Address,
        index: u64,
        nonce: u64,
        deadline: u64,
        signature: Bytes,
    ) -> Result<(), Error> {
        let config = load_config(&env)?;
        let mut action = load_due_action(&env, &owner, index)?;

        permit::redeem(
            &env,
            &config.signature_transfer,
            &owner,
            &action,
            PermitSignature {
                nonce,
                deadline,
                signature,
            },
        )?;

        advance(&env, &owner, index, &mut action)?;
        emit_executed(&env, ActionExecutedEventData { owner, index });

        Ok(())
    }

    /// Polling entry point for automation.
    ///
    /// Runs the permit path when the action is due and returns `true`.
    /// Before the due date it does nothing and returns `false`. Every other
    /// failure is surfaced.
    pub fn check_and_execute(
        env: Env,
        owner: Address,
        index: u64,
        nonce: u64,
        deadline: u64,
        signature: Bytes,
    ) -> Result<bool, Error> {
        ledger::check_index(&env, index)?;
        let action = ledger::get(&env, &owner, index).ok_or(Error::ActionNotFound)?;

        if !shared::is_due(env.ledger().timestamp(), action.next_execution) {
            return Ok(false);
        }

        Self::execute_action_with_permit(env, owner, index, nonce, deadline, signature)?;
        Ok(true)
    }

    /// Deletes one of `owner`'s actions.
    ///
    /// Only touches `owner`'s own namespace. Canceling an allocated but empty
    /// slot succeeds and still emits the cancel event.
    pub fn cancel_action(env: Env, owner: Address, index: u64) -> Result<(), Error> {
        owner.require_auth();

        ledger::check_index(&env, index)?;
        ledger::delete(&env, &owner, index);
        bump_instance(&env);

        log!(&env, "action canceled", owner.clone(), index);
        emit_canceled(&env, ActionCanceledEventData { owner, index });

        Ok(())
    }

    /// Sends `amount` of the configured bridge token from `sender` to
    /// `receiver` on the configured destination network.
    pub fn relay_to_destination(
        env: Env,
        sender: Address,
        receiver: Address,
        amount: i128,
        relayer_fee_pct: i64,
    ) -> Result<(), Error> {
        sender.require_auth();

        let config = load_config(&env)?;
        bridge::relay_to_destination(&env, &config, sender, receiver, amount, relayer_fee_pct)
    }
}

fn load_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Index check, slot lookup and due-date gate shared by both execution paths.
fn load_due_action(env: &Env, owner: &Address, index: u64) -> Result<Action, Error> {
    ledger::check_index(env, index)?;
    let action = ledger::get(env, owner, index).ok_or(Error::ActionNotFound)?;

    if !shared::is_due(env.ledger().timestamp(), action.next_execution) {
        return Err(Error::TooEarly);
    }

    Ok(action)
}

fn advance(env: &Env, owner: &Address, index: u64, action: &mut Action) -> Result<(), Error> {
    action.next_execution = shared::advance_due(action.next_execution, action.frequency)
        .ok_or(Error::ScheduleOverflow)?;
    ledger::set(env, owner, index, action);
    bump_instance(env);

    log!(env, "action executed", owner.clone(), index, action.next_execution);
    Ok(())
}
