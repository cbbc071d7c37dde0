//! JWT header and claims for App Store Connect authentication.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Audience App Store Connect expects in every token.
pub const APP_STORE_CONNECT_AUDIENCE: &str = "appstoreconnect-v1";

/// Token lifetime in seconds.
pub const TOKEN_VALIDITY_SECS: u64 = 3600;

/// JWT claims. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Audience
    pub aud: String,
    /// Subject (app bundle id)
    pub sub: String,
}

impl TokenClaims {
    /// Claims valid for [`TOKEN_VALIDITY_SECS`] from `issued_at`.
    ///
    /// Fails when the expiry would not fit in an `i64` NumericDate.
    pub fn new(issuer: &str, subject: &str, issued_at: u64) -> Result<Self> {
        let exp = issued_at
            .checked_add(TOKEN_VALIDITY_SECS)
            .filter(|exp| i64::try_from(*exp).is_ok())
            .ok_or(TokenError::TimeOutOfRange {
                issued_at,
                validity: TOKEN_VALIDITY_SECS,
            })?;

        Ok(Self {
            iss: issuer.to_string(),
            iat: issued_at,
            exp,
            aud: APP_STORE_CONNECT_AUDIENCE.to_string(),
            sub: subject.to_string(),
        })
    }
}

/// JOSE header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
    /// Id of the registered key the verifier should check against.
    pub kid: String,
}

impl TokenHeader {
    /// Header for an ES256 signature made with key `kid`.
    pub fn es256(kid: &str) -> Self {
        Self {
            alg: "ES256".to_string(),
            typ: "JWT".to_string(),
            kid: kid.to_string(),
        }
    }
}
