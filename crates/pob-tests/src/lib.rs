//! Shared fixtures for the end-to-end tests
//!
//! [`MockProofService`] stands in for the proof API: it issues a fixed
//! nonce at pre-login, only accepts a login whose signature recovers to the
//! expected address, and serves a fixed provers list and challenge payloads.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use pob_client::ApiConfig;
use pob_core::{recover_address, ProofType};

/// Private key used by the fixtures
pub const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Address of [`TEST_KEY`]
pub const TEST_ADDRESS: &str = "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23";

pub const PRE_LOGIN_COOKIE: &str = "__Secure-proof-prelogin=nonce-bound; Path=/; Secure; HttpOnly";
pub const SESSION_COOKIE: &str = "__Secure-proof-session=authed; Path=/; Secure; HttpOnly";

/// Accepts the login only when the signature matches the nonce and address
struct SignatureCheck {
    message: String,
    address: String,
}

impl Respond for SignatureCheck {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let signature = serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| body["signature"].as_str().map(str::to_string));

        let valid = signature
            .and_then(|sig| recover_address(&self.message, &sig).ok())
            .is_some_and(|recovered| recovered == self.address);

        if valid {
            ResponseTemplate::new(200)
                .append_header("set-cookie", SESSION_COOKIE)
                .set_body_json(json!({ "result": { "success": true } }))
        } else {
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "signature mismatch" } }))
        }
    }
}

/// Mocked proof API with the five endpoints of one challenge run
pub struct MockProofService {
    pub server: MockServer,
}

impl MockProofService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Config pointing the client at this server
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            api_url: self.api_url(),
            proof_type: ProofType::Pob,
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/proof/v1", self.server.uri())
    }

    pub async fn mount_pre_login(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/proof/v1/pob/pre-login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("set-cookie", PRE_LOGIN_COOKIE)
                    .append_header("set-cookie", "analytics=1; Path=/")
                    .set_body_json(json!({ "result": { "message": message } })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_login(&self, message: &str, address: &str) {
        Mock::given(method("POST"))
            .and(path("/proof/v1/pob/login"))
            .and(header("cookie", "__Secure-proof-prelogin=nonce-bound"))
            .respond_with(SignatureCheck {
                message: message.to_string(),
                address: address.to_string(),
            })
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_provers(&self, provers: Value) {
        Mock::given(method("POST"))
            .and(path("/proof/v1/pob/provers"))
            .and(header("cookie", "__Secure-proof-session=authed"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": { "provers": provers } })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_trigger(&self, expected_body: Value, payload: Value) {
        Mock::given(method("POST"))
            .and(path("/proof/v1/pob/challenge-request-dcl"))
            .and(header("cookie", "__Secure-proof-session=authed"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_status(&self, challenge_id: &str, payload: Value) {
        Mock::given(method("POST"))
            .and(path("/proof/v1/pob/challenge-status-dcl"))
            .and(header("cookie", "__Secure-proof-session=authed"))
            .and(body_json(json!({ "challenge_id": challenge_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Paths of the requests received so far, in arrival order
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}
