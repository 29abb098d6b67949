//! Prover listing and lookup

use serde_json::{json, Value};
use tracing::info;

use pob_core::{resolve_prover, ProverRecord, Session};

use crate::api::{ProofApiClient, PROVERS};
use crate::error::{ClientError, Result};

/// Session-scoped view of the registered provers
pub struct ProverRegistry<'a> {
    api: &'a ProofApiClient,
}

impl<'a> ProverRegistry<'a> {
    pub fn new(api: &'a ProofApiClient) -> Self {
        Self { api }
    }

    /// Fetch all provers known to the service, in service order
    ///
    /// Entries without a string `id` are skipped.
    pub async fn list_provers(&self, session: &Session) -> Result<Vec<ProverRecord>> {
        let response = self
            .api
            .post(PROVERS, &json!({}), Some(&session.cookie_header()))
            .await?;

        let provers = response
            .body
            .pointer("/result/provers")
            .and_then(Value::as_array)
            .ok_or(ClientError::NoProvers)?;

        let records: Vec<ProverRecord> = provers
            .iter()
            .cloned()
            .filter_map(ProverRecord::from_json)
            .collect();
        info!("Listed {} provers", records.len());
        Ok(records)
    }

    /// First prover whose address segment matches `short_id`, ignoring case
    pub fn resolve<'r>(records: &'r [ProverRecord], short_id: &str) -> Option<&'r ProverRecord> {
        resolve_prover(records, short_id)
    }
}
