//! Compact JWS encoding and the App Store Connect curl command.
//!
//! The builder is pure apart from reading the [`Clock`]: it never touches the
//! clipboard or the console, so callers decide what to do with the command.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Serialize;

use crate::claims::{TokenClaims, TokenHeader};
use crate::error::Result;
use crate::key::Es256Key;

/// Endpoint the generated command calls.
pub const APPS_ENDPOINT: &str = "https://api.appstoreconnect.apple.com/v1/apps";

/// Source of the current time in Unix seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Clamp pre-1970 readings instead of wrapping.
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Identifiers App Store Connect assigns to the account, key and app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Issuer id from the API Keys page
    pub issuer_id: String,
    /// Private key id
    pub key_id: String,
    /// App bundle id, sent as the subject
    pub subject: String,
}

/// Encode and sign `header.claims` as a three-segment compact token.
pub fn encode_token<H, C>(header: &H, claims: &C, key: &Es256Key) -> Result<String>
where
    H: Serialize,
    C: Serialize,
{
    let header_json = serde_json::to_vec(header)?;
    let claims_json = serde_json::to_vec(claims)?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );
    let signature = key.sign(signing_input.as_bytes())?;

    Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature)))
}

/// Render the curl invocation that lists the account's apps using `token`.
pub fn render_curl_command(token: &str) -> String {
    format!(
        "curl -v \\\n  -H \"Authorization: Bearer {}\" \\\n  \"{}\"\n",
        token, APPS_ENDPOINT
    )
}

/// Builds signed App Store Connect tokens for one set of credentials.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    credentials: Credentials,
    key: Es256Key,
}

impl TokenBuilder {
    pub fn new(credentials: Credentials, key: Es256Key) -> Self {
        Self { credentials, key }
    }

    /// Sign a token valid for one hour starting at `clock.now()`.
    pub fn build_token(&self, clock: &dyn Clock) -> Result<String> {
        let issued_at = clock.now();
        let claims = TokenClaims::new(
            &self.credentials.issuer_id,
            &self.credentials.subject,
            issued_at,
        )?;
        let header = TokenHeader::es256(&self.credentials.key_id);

        tracing::debug!(
            kid = %header.kid,
            iat = claims.iat,
            exp = claims.exp,
            "Signing App Store Connect token"
        );

        encode_token(&header, &claims, &self.key)
    }

    /// Sign a token and embed it in the curl command template.
    pub fn build_authorization_command(&self, clock: &dyn Clock) -> Result<String> {
        let token = self.build_token(clock)?;
        Ok(render_curl_command(&token))
    }
}
