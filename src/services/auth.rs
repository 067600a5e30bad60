//! Authentication service implementation
//!
//! This service checks the shared administrator credential and issues the
//! signed session tokens carried in the session cookie.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::utils::errors::{AcademyError, Result};
use crate::utils::logging::log_failed_login;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
    pub jti: String,
}

/// Authentication service for the single administrator account
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    /// Create a new AuthService instance.
    ///
    /// Without a configured secret a random one is generated, so sessions do
    /// not survive a restart.
    pub fn new(config: AuthConfig) -> Self {
        let secret: Vec<u8> = if config.session_secret.is_empty() {
            warn!("No session secret configured; generating an ephemeral one");
            rand::thread_rng().gen::<[u8; 32]>().to_vec()
        } else {
            config.session_secret.as_bytes().to_vec()
        };

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            config,
        }
    }

    /// Check submitted credentials against the configured administrator
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        username == self.config.username && password == self.config.password
    }

    /// Verify credentials and issue a session token
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        if !self.verify_credentials(username, password) {
            log_failed_login(username);
            return Err(AcademyError::Authentication("Invalid credentials".to_string()));
        }

        let token = self.issue_session()?;
        info!(username = username, "Administrator logged in");
        Ok(token)
    }

    /// Issue a signed session token for the administrator
    pub fn issue_session(&self) -> Result<String> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = SessionClaims {
            sub: self.config.username.clone(),
            iat: now,
            exp: now + self.session_ttl_seconds(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a session token taken from the cookie
    pub fn validate_session(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.sub = Some(self.config.username.clone());

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            debug!(error = %e, "Session token rejected");
            AcademyError::Session(e)
        })?;

        Ok(data.claims)
    }

    /// Whether the token is a valid session
    pub fn is_authenticated(&self, token: Option<&str>) -> bool {
        token.map(|t| self.validate_session(t).is_ok()).unwrap_or(false)
    }

    pub fn session_ttl_seconds(&self) -> u64 {
        self.config.session_ttl_hours * 3600
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }
}
