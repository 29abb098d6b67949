//! Challenge trigger and status

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use pob_core::{ChallengeRequest, Session};

use crate::api::{ProofApiClient, CHALLENGE_REQUEST, CHALLENGE_STATUS};
use crate::error::Result;
use crate::types::{ChallengeStatusBody, TriggerChallengeBody};

/// Raw server payloads for one challenge run
///
/// The challenge lifecycle lives server-side; nothing here is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeOutcome {
    pub trigger: Value,
    pub status: Value,
}

/// Triggers a challenge and reads its status once
pub struct ChallengeOrchestrator<'a> {
    api: &'a ProofApiClient,
}

impl<'a> ChallengeOrchestrator<'a> {
    pub fn new(api: &'a ProofApiClient) -> Self {
        Self { api }
    }

    /// Trigger then perform a single immediate status read
    pub async fn run(&self, session: &Session, request: &ChallengeRequest) -> Result<ChallengeOutcome> {
        let trigger = self.trigger(session, request).await?;
        let status = self.check_status(session, &request.challenge_id).await?;
        Ok(ChallengeOutcome { trigger, status })
    }

    pub async fn trigger(&self, session: &Session, request: &ChallengeRequest) -> Result<Value> {
        info!(
            "Trigger {} challenge {} for prover {}",
            request.challenge_type, request.challenge_id, request.prover_address
        );
        let response = self
            .api
            .post(
                CHALLENGE_REQUEST,
                &TriggerChallengeBody::from(request),
                Some(&session.cookie_header()),
            )
            .await?;
        Ok(response.body)
    }

    pub async fn check_status(&self, session: &Session, challenge_id: &str) -> Result<Value> {
        info!("Check status of challenge {}", challenge_id);
        let response = self
            .api
            .post(
                CHALLENGE_STATUS,
                &ChallengeStatusBody { challenge_id },
                Some(&session.cookie_header()),
            )
            .await?;
        Ok(response.body)
    }
}
