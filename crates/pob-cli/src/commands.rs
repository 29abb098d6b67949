//! CLI command implementation

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use pob_client::{run_challenge, ApiConfig, ClientError, PipelineOutcome, ProofApiClient};
use pob_core::{ChallengeRequest, ChallengeType, CoreError, MessageSigner, ProofType};

use crate::key::load_key_file;

/// Trigger a bandwidth challenge against a prover and read its status once
#[derive(Parser, Debug)]
#[command(name = "pob-challenge")]
#[command(about = "Log in with a wallet key, trigger a challenge against a prover and check its status")]
#[command(version)]
pub struct Cli {
    /// Challenge id to trigger
    #[arg(long)]
    pub challenge_id: Option<String>,

    /// Prover address (the part after `/` in the prover id)
    #[arg(long)]
    pub prover: Option<String>,

    /// Bandwidth direction to challenge
    #[arg(long, value_enum, default_value = "downlink")]
    pub challenge_type: ChallengeTypeArg,

    /// Proof family (overrides the config file)
    #[arg(long, value_enum)]
    pub proof_type: Option<ProofTypeArg>,

    /// Proof API root (overrides the config file)
    #[arg(long)]
    pub api_url: Option<String>,

    /// JSON API configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File holding the hex-encoded private key
    #[arg(long, default_value = "key")]
    pub key_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChallengeTypeArg {
    Downlink,
    Uplink,
}

impl From<ChallengeTypeArg> for ChallengeType {
    fn from(arg: ChallengeTypeArg) -> Self {
        match arg {
            ChallengeTypeArg::Downlink => ChallengeType::Downlink,
            ChallengeTypeArg::Uplink => ChallengeType::Uplink,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProofTypeArg {
    /// Proof of bandwidth
    Pob,
    /// Proof of location
    Pol,
}

impl From<ProofTypeArg> for ProofType {
    fn from(arg: ProofTypeArg) -> Self {
        match arg {
            ProofTypeArg::Pob => ProofType::Pob,
            ProofTypeArg::Pol => ProofType::Pol,
        }
    }
}

/// Error type for CLI runs
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("--challenge-id is required")]
    MissingChallengeId,

    #[error("--prover public key is required")]
    MissingProver,

    #[error("Failed to read key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Key file {0} is empty")]
    EmptyKeyFile(PathBuf),

    #[error("Invalid key: {0}")]
    Key(#[from] CoreError),

    #[error("Failed to load config {path}: {source}")]
    Config {
        path: PathBuf,
        source: ClientError,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CliError {
    /// A required flag was absent
    pub fn is_missing_flag(&self) -> bool {
        matches!(self, CliError::MissingChallengeId | CliError::MissingProver)
    }

    /// No provers were listed, or none matched the requested address
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, CliError::Client(e) if e.is_lookup_failure())
    }
}

impl Cli {
    /// Build the challenge request from the flags
    ///
    /// Empty values count as missing.
    pub fn challenge_request(&self) -> Result<ChallengeRequest, CliError> {
        let challenge_id = self
            .challenge_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CliError::MissingChallengeId)?;
        let prover = self
            .prover
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CliError::MissingProver)?;

        Ok(ChallengeRequest::new(
            challenge_id,
            prover,
            self.challenge_type.into(),
        ))
    }

    /// Config file (if any) with flag overrides applied
    pub fn api_config(&self) -> Result<ApiConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ApiConfig::load(path).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?,
            None => ApiConfig::default(),
        };

        if let Some(proof_type) = self.proof_type {
            config.proof_type = proof_type.into();
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }

        Ok(config)
    }
}

/// Run the CLI
///
/// All local preconditions (flags, config, key) are checked before the
/// first request goes out.
pub async fn run(cli: Cli) -> Result<PipelineOutcome, CliError> {
    let request = cli.challenge_request()?;
    let config = cli.api_config()?;
    let wallet = load_key_file(&cli.key_file)?;

    info!("Address: {}", wallet.address());
    info!("Challenge id: {}", request.challenge_id);

    let api = ProofApiClient::new(config);
    let run = run_challenge(&api, &wallet, &request).await?;
    Ok(run)
}

/// Print the prover and both challenge payloads, unmodified
pub fn print_outcome(run: &PipelineOutcome) {
    info!("Prover: {}", run.prover.raw);
    println!("CHALLENGE {}", run.outcome.trigger);
    println!("STATUS {}", run.outcome.status);
}
