//! Login, lookup and challenge as one linear sequence
//!
//! Each stage runs only once the previous one has produced its output, and
//! the first failure ends the run. Nothing is retried or rolled back.

use tracing::info;

use pob_core::{ChallengeRequest, MessageSigner, ProverRecord};

use crate::api::ProofApiClient;
use crate::auth::SessionAuthenticator;
use crate::challenge::{ChallengeOrchestrator, ChallengeOutcome};
use crate::error::{ClientError, Result};
use crate::registry::ProverRegistry;

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub prover: ProverRecord,
    pub outcome: ChallengeOutcome,
}

/// Authenticate, resolve the prover, trigger the challenge, read its status
pub async fn run_challenge(
    api: &ProofApiClient,
    signer: &dyn MessageSigner,
    request: &ChallengeRequest,
) -> Result<PipelineOutcome> {
    let session = SessionAuthenticator::new(api).authenticate(signer).await?;

    let records = ProverRegistry::new(api).list_provers(&session).await?;
    let prover = ProverRegistry::resolve(&records, &request.prover_address)
        .cloned()
        .ok_or_else(|| ClientError::ProverNotFound(request.prover_address.clone()))?;
    info!("Resolved prover {}", prover.id);

    let outcome = ChallengeOrchestrator::new(api).run(&session, request).await?;
    Ok(PipelineOutcome { prover, outcome })
}
