//! Signature-authorized transfer adapter.
//!
//! Turns an action's transfer parameters plus an out-of-band signature into
//! a single call against the external signature-transfer service. Signature
//! checks, nonce replay protection, deadline enforcement and the token
//! movement itself all belong to that service; this module only shapes the
//! request and surfaces the outcome.

use soroban_sdk::{contractclient, contracttype, log, token, Address, Bytes, Env};

use crate::events::{emit_permit_transfer, PermitTransferEventData};
use crate::types::{Action, Error};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenPermissions {
    pub token: Address,
    pub amount: i128,
}

/// The signed transfer intent.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermitTransferFrom {
    pub permitted: TokenPermissions,
    pub nonce: u64,
    /// Ledger timestamp after which the signature is no longer valid.
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureTransferDetails {
    pub to: Address,
    pub requested_amount: i128,
}

/// Interface of the external signature-transfer service.
#[contractclient(name = "SignatureTransferClient")]
pub trait SignatureTransfer {
    fn permit_transfer_from(
        env: Env,
        permit: PermitTransferFrom,
        transfer_details: SignatureTransferDetails,
        owner: Address,
        signature: Bytes,
    );
}

/// Caller-supplied half of a redemption. The action supplies the rest.
#[derive(Clone, Debug)]
pub struct PermitSignature {
    pub nonce: u64,
    pub deadline: u64,
    pub signature: Bytes,
}

/// Moves `action.amount` of `action.token` from `payer` to
/// `action.recipient` through the signature-transfer service.
///
/// The balance check is advisory; the service re-validates atomically and
/// has the final word.
pub fn redeem(
    env: &Env,
    service: &Address,
    payer: &Address,
    action: &Action,
    signed: PermitSignature,
) -> Result<(), Error> {
    if action.amount <= 0 {
        return Err(Error::InvalidInput);
    }

    let balance = token::Client::new(env, &action.token).balance(payer);
    if balance < action.amount {
        log!(env, "permit rejected: insufficient balance", payer.clone(), balance);
        return Err(Error::AuthorizationRejected);
    }

    let permit = PermitTransferFrom {
        permitted: TokenPermissions {
            token: action.token.clone(),
            amount: action.amount,
        },
        nonce: signed.nonce,
        deadline: signed.deadline,
    };
    let details = SignatureTransferDetails {
        to: action.recipient.clone(),
        requested_amount: action.amount,
    };

    let outcome = SignatureTransferClient::new(env, service).try_permit_transfer_from(
        &permit,
        &details,
        payer,
        &signed.signature,
    );
    if !matches!(outcome, Ok(Ok(()))) {
        log!(env, "permit rejected by signature service", payer.clone(), signed.nonce);
        return Err(Error::AuthorizationRejected);
    }

    emit_permit_transfer(
        env,
        PermitTransferEventData {
            token: action.token.clone(),
            payer: payer.clone(),
            receiver: action.recipient.clone(),
            amount: action.amount,
        },
    );

    Ok(())
}
