//! Token acquisition.
//!
//! Exchanges a username and password for a web service token at the site's
//! `login/token.php` endpoint. One attempt, no retry.

use serde::Deserialize;
use tracing::{debug, info, instrument};

use moodletree_core::{Credentials, Token};

use crate::config::ServiceConfig;
use crate::envelope::{parse_payload, request_data};
use crate::error::FetchError;
use crate::transport::{Params, Transport};

/// Body of a successful token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Exchanges credentials for a [`Token`].
pub struct Authenticator<'a> {
    config: &'a ServiceConfig,
    transport: &'a dyn Transport,
}

impl<'a> Authenticator<'a> {
    /// Creates an authenticator for the configured site.
    pub fn new(config: &'a ServiceConfig, transport: &'a dyn Transport) -> Self {
        Self { config, transport }
    }

    /// Requests a token for `username`/`password`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if the request cannot complete
    /// - [`FetchError::Service`] if the service rejects the login or
    ///   answers without a token
    #[instrument(skip_all)]
    pub async fn get_token(&self, username: &str, password: &str) -> Result<Token, FetchError> {
        debug!("Requesting token");

        let mut params = Params::new();
        params.insert("username".to_string(), username.to_string());
        params.insert("password".to_string(), password.to_string());
        params.insert("service".to_string(), self.config.service.clone());

        let body = request_data(self.transport, &self.config.auth_url(), &params).await?;
        let response: TokenResponse = parse_payload(body, "token response")?;

        match response.token {
            Some(token) if !token.is_empty() => {
                info!("Token acquired");
                Ok(Token::new(token))
            }
            _ => Err(FetchError::service("no token in response")),
        }
    }

    /// Requests a token for a credential pair.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::get_token`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Token, FetchError> {
        self.get_token(&credentials.username, &credentials.password)
            .await
    }
}
