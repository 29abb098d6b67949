//! pob-client - Async client for the proof API
//!
//! Implements the wallet login handshake (pre-login, sign, login) and the
//! session-scoped prover lookup and challenge endpoints.
//!
//! # Example
//!
//! ```no_run
//! use pob_client::{run_challenge, ApiConfig, ProofApiClient};
//! use pob_core::{ChallengeRequest, LocalWallet};
//!
//! # async fn demo(key_hex: &str) -> pob_client::Result<()> {
//! let api = ProofApiClient::new(ApiConfig::default());
//! let wallet = LocalWallet::from_hex(key_hex)?;
//! let request = ChallengeRequest::downlink("c1", "0xdead");
//! let run = run_challenge(&api, &wallet, &request).await?;
//! println!("{}", run.outcome.status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod challenge;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod types;


pub use api::{ApiResponse, ProofApiClient};
pub use auth::SessionAuthenticator;
pub use challenge::{ChallengeOrchestrator, ChallengeOutcome};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{ClientError, Result};
pub use pipeline::{run_challenge, PipelineOutcome};
pub use registry::ProverRegistry;
