//! ASC Core - signed token builder for the App Store Connect API.
//!
//! Builds ES256 JWTs from injected credentials and the current time, and
//! renders them into a ready-to-run curl command. No I/O happens here.

pub mod claims;
pub mod error;
pub mod key;
pub mod token;

pub use claims::{TokenClaims, TokenHeader, APP_STORE_CONNECT_AUDIENCE, TOKEN_VALIDITY_SECS};
pub use error::{Result, TokenError};
pub use key::Es256Key;
pub use token::{
    encode_token, render_curl_command, Clock, Credentials, FixedClock, SystemClock, TokenBuilder,
    APPS_ENDPOINT,
};
