//! Challenge-response login
//!
//! 1. Pre-login: claim an address, receive a nonce message and pre-auth
//!    cookies (only `__Secure-proof*` ones are kept).
//! 2. Login: sign the nonce, present the pre-auth cookies, receive the
//!    authenticated session cookies.

use serde_json::Value;
use tracing::{debug, info};

use pob_core::{MessageSigner, PreLoginChallenge, Session, SECURE_COOKIE_PREFIX};

use crate::api::{ProofApiClient, LOGIN, PRE_LOGIN};
use crate::error::{ClientError, Result};
use crate::types::{LoginRequest, PreLoginRequest};

/// Turns a signing identity into an authenticated [`Session`]
pub struct SessionAuthenticator<'a> {
    api: &'a ProofApiClient,
}

impl<'a> SessionAuthenticator<'a> {
    pub fn new(api: &'a ProofApiClient) -> Self {
        Self { api }
    }

    /// Run pre-login then login
    pub async fn authenticate(&self, signer: &dyn MessageSigner) -> Result<Session> {
        let challenge = self.pre_login(signer.address()).await?;
        self.login(signer, &challenge).await
    }

    /// Claim `address` and fetch the message to sign
    pub async fn pre_login(&self, address: &str) -> Result<PreLoginChallenge> {
        info!("Pre-login for {}", address);
        let response = self
            .api
            .post(PRE_LOGIN, &PreLoginRequest::payer(address), None)
            .await?;

        let message = response
            .body
            .pointer("/result/message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .ok_or(ClientError::MissingChallengeMessage)?
            .to_string();
        debug!("Challenge message: {}", message);

        let cookies = response.cookies.with_prefix(SECURE_COOKIE_PREFIX);
        if cookies.is_empty() {
            return Err(ClientError::MissingCookies { stage: PRE_LOGIN });
        }

        Ok(PreLoginChallenge { message, cookies })
    }

    /// Redeem a signature over the pre-login message for a session
    pub async fn login(
        &self,
        signer: &dyn MessageSigner,
        challenge: &PreLoginChallenge,
    ) -> Result<Session> {
        let signature = signer.sign_message(&challenge.message)?;
        debug!("Signature: {}", signature);

        info!("Login...");
        let response = self
            .api
            .post(
                LOGIN,
                &LoginRequest {
                    signature: &signature,
                },
                Some(&challenge.cookies.cookie_header()),
            )
            .await?;

        if response.body.pointer("/result/success") == Some(&Value::Bool(false)) {
            return Err(ClientError::LoginRejected(response.body.to_string()));
        }
        if response.cookies.is_empty() {
            return Err(ClientError::MissingCookies { stage: LOGIN });
        }

        info!("Login successful ({} session cookies)", response.cookies.len());
        Ok(Session::new(response.cookies))
    }
}
