//! Stand-ins for the external collaborators, used by unit and integration
//! tests. Built only under `cfg(test)` or the `testutils` feature.

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Bytes, Env};

use crate::bridge::DepositRequest;
use crate::permit::{PermitTransferFrom, SignatureTransferDetails};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum MockKey {
    UsedNonce(Address, u64),
    Redemptions,
    LastDeposit,
    Deposits,
}

/// Signature-transfer service double.
///
/// Accepts any non-empty signature, enforces the deadline and nonce
/// replay rules, and moves tokens with `transfer_from` against the
/// standing allowance the owner granted this contract.
#[contract]
pub struct MockSignatureTransfer;

#[contractimpl]
impl MockSignatureTransfer {
    pub fn permit_transfer_from(
        env: Env,
        permit: PermitTransferFrom,
        transfer_details: SignatureTransferDetails,
        owner: Address,
        signature: Bytes,
    ) {
        assert!(!signature.is_empty(), "invalid signature");
        assert!(
            env.ledger().timestamp() <= permit.deadline,
            "signature expired"
        );
        assert!(
            transfer_details.requested_amount <= permit.permitted.amount,
            "invalid amount"
        );

        let nonce_key = MockKey::UsedNonce(owner.clone(), permit.nonce);
        assert!(
            !env.storage().persistent().has(&nonce_key),
            "nonce already used"
        );
        env.storage().persistent().set(&nonce_key, &true);

        token::Client::new(&env, &permit.permitted.token).transfer_from(
            &env.current_contract_address(),
            &owner,
            &transfer_details.to,
            &transfer_details.requested_amount,
        );

        let redemptions: u32 = env
            .storage()
            .instance()
            .get(&MockKey::Redemptions)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&MockKey::Redemptions, &(redemptions + 1));
    }

    pub fn redemptions(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockKey::Redemptions)
            .unwrap_or(0)
    }

    pub fn nonce_used(env: Env, owner: Address, nonce: u64) -> bool {
        env.storage()
            .persistent()
            .has(&MockKey::UsedNonce(owner, nonce))
    }
}

/// Relay double: pulls the deposit into its own balance and remembers it.
#[contract]
pub struct MockRelay;

#[contractimpl]
impl MockRelay {
    pub fn deposit(env: Env, request: DepositRequest) {
        request.depositor.require_auth();
        assert!(
            request.relayer_fee_pct >= 0 && request.relayer_fee_pct < 1_000_000_000_000_000_000,
            "invalid relayer fee"
        );

        token::Client::new(&env, &request.token).transfer(
            &request.depositor,
            &env.current_contract_address(),
            &request.amount,
        );

        let deposits: u32 = env
            .storage()
            .instance()
            .get(&MockKey::Deposits)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&MockKey::Deposits, &(deposits + 1));
        env.storage().instance().set(&MockKey::LastDeposit, &request);
    }

    pub fn deposits(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockKey::Deposits)
            .unwrap_or(0)
    }

    pub fn last_deposit(env: Env) -> Option<DepositRequest> {
        env.storage().instance().get(&MockKey::LastDeposit)
    }
}
