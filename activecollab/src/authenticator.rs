//! Emissão de token para instâncias self-hosted do Active Collab

use crate::client::build_http_client;
use crate::error::{ActiveCollabError, Result};
use crate::token::Token;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Troca credenciais por um [`Token`]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Emite um token (uma chamada de rede)
    async fn issue_token(&self) -> Result<Token>;
}

#[derive(Serialize)]
struct IssueTokenRequest<'a> {
    username: &'a str,
    password: &'a str,
    client_name: &'a str,
    client_vendor: &'a str,
}

#[derive(Debug, Deserialize)]
struct IssueTokenResponse {
    #[serde(default)]
    is_ok: bool,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Autenticador para Active Collab self-hosted
///
/// `POST {url}/api/v{versão}/issue-token` com usuário, senha, nome da
/// aplicação (`client_name`) e nome da empresa (`client_vendor`).
#[derive(Clone)]
pub struct SelfHosted {
    company_name: String,
    application_name: String,
    user: String,
    password: String,
    url: String,
    api_version: u32,
    ssl_verify_peer: bool,
    timeout: Duration,
    connect_timeout: Duration,
}

impl SelfHosted {
    /// Cria um autenticador
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(
        company_name: impl Into<String>,
        application_name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        api_version: u32,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            application_name: application_name.into(),
            user: user.into(),
            password: password.into(),
            url: url.into().trim_end_matches('/').to_string(),
            api_version,
            ssl_verify_peer: true,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Liga/desliga a verificação do certificado TLS do servidor
    pub fn set_ssl_verify_peer(&mut self, verify: bool) {
        self.ssl_verify_peer = verify;
    }

    pub fn ssl_verify_peer(&self) -> bool {
        self.ssl_verify_peer
    }

    /// Define timeouts customizados (em segundos)
    pub fn set_timeouts(&mut self, total_timeout_secs: u64, connect_timeout_secs: u64) {
        self.timeout = Duration::from_secs(total_timeout_secs);
        self.connect_timeout = Duration::from_secs(connect_timeout_secs);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    fn issue_token_url(&self) -> String {
        format!("{}/api/v{}/issue-token", self.url, self.api_version)
    }
}

#[async_trait]
impl Authenticator for SelfHosted {
    async fn issue_token(&self) -> Result<Token> {
        let http_client =
            build_http_client(self.ssl_verify_peer, self.timeout, self.connect_timeout)?;
        let url = self.issue_token_url();

        tracing::debug!("POST {} (user: {})", url, self.user);

        let response = http_client
            .post(&url)
            .json(&IssueTokenRequest {
                username: &self.user,
                password: &self.password,
                client_name: &self.application_name,
                client_vendor: &self.company_name,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Active Collab issue-token error ({}): {}", status, body);
            return Err(ActiveCollabError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: IssueTokenResponse = serde_json::from_str(&body)?;

        match parsed.token {
            Some(token) if parsed.is_ok && !token.is_empty() => {
                Ok(Token::new(token, self.url.clone(), self.api_version))
            }
            _ => Err(ActiveCollabError::AuthError(
                parsed
                    .message
                    .unwrap_or_else(|| "issue-token did not return a token".to_string()),
            )),
        }
    }
}

impl std::fmt::Debug for SelfHosted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfHosted")
            .field("company_name", &self.company_name)
            .field("application_name", &self.application_name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("url", &self.url)
            .field("api_version", &self.api_version)
            .field("ssl_verify_peer", &self.ssl_verify_peer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> SelfHosted {
        SelfHosted::new("ACME", "Middleware", "bot@acme.com", "secret", "https://ac.acme.com/", 5)
    }

    #[test]
    fn test_issue_token_url() {
        let auth = authenticator();
        assert_eq!(auth.url(), "https://ac.acme.com");
        assert_eq!(auth.issue_token_url(), "https://ac.acme.com/api/v5/issue-token");
    }

    #[test]
    fn test_ssl_verify_peer_toggle() {
        let mut auth = authenticator();
        assert!(auth.ssl_verify_peer());
        auth.set_ssl_verify_peer(false);
        assert!(!auth.ssl_verify_peer());
    }

    #[test]
    fn test_debug_hides_password() {
        let debug_str = format!("{:?}", authenticator());
        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("bot@acme.com"));
    }
}
