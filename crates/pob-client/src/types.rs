//! Request bodies for the proof API endpoints

use serde::Serialize;

use pob_core::{ChallengeRequest, ChallengeType, DECLARED_BANDWIDTH, KEY_TYPE_ETHEREUM, PAYER_ROLE};

/// Identity claims sent to `/pre-login`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreLoginRequest<'a> {
    pub public_key: &'a str,
    pub wallet_public_key: WalletPublicKey<'a>,
    pub key_type: &'static str,
    pub role: &'static str,
    pub claims: BandwidthClaims,
}

impl<'a> PreLoginRequest<'a> {
    /// Claims for a payer identified by `address`
    pub fn payer(address: &'a str) -> Self {
        Self {
            public_key: address,
            wallet_public_key: WalletPublicKey { ethereum: address },
            key_type: KEY_TYPE_ETHEREUM,
            role: PAYER_ROLE,
            claims: BandwidthClaims::declared(),
        }
    }
}

/// Scheme-qualified copy of the public address
#[derive(Debug, Clone, Serialize)]
pub struct WalletPublicKey<'a> {
    pub ethereum: &'a str,
}

/// Declared bandwidth capability, not a measurement
#[derive(Debug, Clone, Serialize)]
pub struct BandwidthClaims {
    pub downlink_bandwidth: &'static str,
    pub uplink_bandwidth: &'static str,
}

impl BandwidthClaims {
    pub fn declared() -> Self {
        Self {
            downlink_bandwidth: DECLARED_BANDWIDTH,
            uplink_bandwidth: DECLARED_BANDWIDTH,
        }
    }
}

/// Signed challenge message sent to `/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub signature: &'a str,
}

/// Body of `/challenge-request-dcl`
#[derive(Debug, Clone, Serialize)]
pub struct TriggerChallengeBody<'a> {
    pub challenge_id: &'a str,
    pub prover: &'a str,
    pub challenge_type: ChallengeType,
}

impl<'a> From<&'a ChallengeRequest> for TriggerChallengeBody<'a> {
    fn from(request: &'a ChallengeRequest) -> Self {
        Self {
            challenge_id: &request.challenge_id,
            prover: &request.prover_address,
            challenge_type: request.challenge_type,
        }
    }
}

/// Body of `/challenge-status-dcl`
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeStatusBody<'a> {
    pub challenge_id: &'a str,
}
