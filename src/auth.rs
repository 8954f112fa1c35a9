// Use 3rd party
use md5::{Digest, Md5};
use thiserror::Error;

// Use built-in library
use std::env;
use std::fmt;

pub const OMNIA_HEADER_X_REQUEST_CID: &str = "X-Request-CID";
pub const OMNIA_HEADER_X_REQUEST_TOKEN: &str = "X-Request-Token";

pub const ENV_DOMAIN_ID: &str = "OMNIA_DOMAIN_ID";
pub const ENV_API_SECRET: &str = "OMNIA_API_SECRET";
pub const ENV_SESSION_ID: &str = "OMNIA_SESSION_ID";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Everything needed to sign Omnia requests.
#[derive(Clone, PartialEq, Eq)]
pub struct OmniaCredentials {
    pub domain_id: String,
    pub api_secret: String,
    pub session_id: String,
}

impl OmniaCredentials {
    #[must_use]
    pub fn new(domain_id: &str, api_secret: &str, session_id: &str) -> Self {
        Self {
            domain_id: domain_id.to_owned(),
            api_secret: api_secret.to_owned(),
            session_id: session_id.to_owned(),
        }
    }

    /// Reads `OMNIA_DOMAIN_ID`, `OMNIA_API_SECRET` and `OMNIA_SESSION_ID`.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let var = |name: &'static str| env::var(name).map_err(|_| CredentialsError::MissingVar(name));
        Ok(Self {
            domain_id: var(ENV_DOMAIN_ID)?,
            api_secret: var(ENV_API_SECRET)?,
            session_id: var(ENV_SESSION_ID)?,
        })
    }

    /// Header pair authenticating a call to `operation`.
    pub fn request_headers(&self, operation: &str) -> RequestHeaders {
        RequestHeaders {
            cid: self.session_id.clone(),
            token: sign(operation, &self.domain_id, &self.api_secret),
        }
    }
}

// The secret must never end up in logs.
impl fmt::Debug for OmniaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmniaCredentials")
            .field("domain_id", &self.domain_id)
            .field("api_secret", &"<redacted>")
            .field("session_id", &self.session_id)
            .finish()
    }
}

/// The `X-Request-CID` / `X-Request-Token` values of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub cid: String,
    pub token: String,
}

impl RequestHeaders {
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (OMNIA_HEADER_X_REQUEST_CID, self.cid.as_str()),
            (OMNIA_HEADER_X_REQUEST_TOKEN, self.token.as_str()),
        ]
    }
}

/// Lowercase hex MD5 of `operation`, `domain_id` and `api_secret` concatenated.
///
/// There is no timestamp in the signature, so a captured token stays valid
/// for the same operation and domain.
pub fn sign(operation: &str, domain_id: &str, api_secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(operation.as_bytes());
    hasher.update(domain_id.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
