//! Session cookies for the proof API login handshake
//!
//! Login is two steps. Pre-login hands back a message to sign plus a
//! pre-auth cookie set scoped to the login endpoint; login redeems the
//! signature for the authenticated cookie set used by every other call.
//! Cookies are never stored in a jar: they are carried explicitly from one
//! stage to the next.

/// Name prefix of the cookies the service designates as session artifacts
pub const SECURE_COOKIE_PREFIX: &str = "__Secure-proof";

/// Ordered list of raw `Set-Cookie` values returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies(Vec<String>);

impl SessionCookies {
    /// Wrap raw `Set-Cookie` header values, preserving order
    pub fn new(set_cookie: Vec<String>) -> Self {
        Self(set_cookie)
    }

    /// Keep only cookies whose name starts with `prefix`
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(
            self.0
                .iter()
                .filter(|cookie| cookie.trim_start().starts_with(prefix))
                .cloned()
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Value for a `Cookie` request header
    ///
    /// Attributes (`Path`, `HttpOnly`, ...) are dropped; only the
    /// `name=value` pair of each entry is forwarded.
    pub fn cookie_header(&self) -> String {
        self.0
            .iter()
            .map(|cookie| cookie.split(';').next().unwrap_or_default().trim())
            .filter(|pair| !pair.is_empty())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Pre-auth stage: the nonce to sign and the cookies bound to it
#[derive(Debug, Clone)]
pub struct PreLoginChallenge {
    /// One-time message issued by the service
    pub message: String,
    /// `__Secure-proof*` cookies from the pre-login response
    pub cookies: SessionCookies,
}

/// Authenticated session, valid for one process run
#[derive(Debug, Clone)]
pub struct Session {
    cookies: SessionCookies,
}

impl Session {
    pub fn new(cookies: SessionCookies) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &SessionCookies {
        &self.cookies
    }

    /// `Cookie` header presented on protected endpoints
    pub fn cookie_header(&self) -> String {
        self.cookies.cookie_header()
    }
}
