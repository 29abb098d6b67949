//! pob-core - Wallet identity and domain types for proof-of-bandwidth challenges
//!
//! This crate holds everything that does not touch the network:
//! - The signing identity (secp256k1 wallet, EIP-191 message signing)
//! - The session cookie model used by the login handshake
//! - Prover records and short-identifier resolution
//! - Challenge request and proof/challenge type definitions

pub mod error;
pub mod identity;
pub mod prover;
pub mod session;
pub mod types;

pub use error::{CoreError, Result};
pub use identity::{recover_address, LocalWallet, MessageSigner};
pub use prover::{resolve_prover, ProverRecord};
pub use session::{PreLoginChallenge, Session, SessionCookies, SECURE_COOKIE_PREFIX};
pub use types::{ChallengeRequest, ChallengeType, ProofType};

/// Role claimed by this client during pre-login
pub const PAYER_ROLE: &str = "payer";

/// Key type claimed during pre-login
pub const KEY_TYPE_ETHEREUM: &str = "ethereum";

/// Declared downlink/uplink bandwidth capability sent with pre-login
pub const DECLARED_BANDWIDTH: &str = "10";
