//! Proof and challenge type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Proof family served under `/proof/v1/<proof_type>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofType {
    /// Proof of bandwidth
    #[default]
    Pob,
    /// Proof of location
    Pol,
}

impl ProofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofType::Pob => "pob",
            ProofType::Pol => "pol",
        }
    }
}

impl fmt::Display for ProofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProofType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pob" => Ok(ProofType::Pob),
            "pol" => Ok(ProofType::Pol),
            other => Err(CoreError::UnknownProofType(other.to_string())),
        }
    }
}

/// Bandwidth direction exercised by a challenge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    #[default]
    Downlink,
    Uplink,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Downlink => "downlink",
            ChallengeType::Uplink => "uplink",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "downlink" => Ok(ChallengeType::Downlink),
            "uplink" => Ok(ChallengeType::Uplink),
            other => Err(CoreError::UnknownChallengeType(other.to_string())),
        }
    }
}

/// A challenge to trigger against one prover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub challenge_id: String,
    /// Prover identifier as supplied by the operator
    pub prover_address: String,
    pub challenge_type: ChallengeType,
}

impl ChallengeRequest {
    pub fn new(
        challenge_id: impl Into<String>,
        prover_address: impl Into<String>,
        challenge_type: ChallengeType,
    ) -> Self {
        Self {
            challenge_id: challenge_id.into(),
            prover_address: prover_address.into(),
            challenge_type,
        }
    }

    /// Downlink challenge, the default kind
    pub fn downlink(challenge_id: impl Into<String>, prover_address: impl Into<String>) -> Self {
        Self::new(challenge_id, prover_address, ChallengeType::Downlink)
    }
}
