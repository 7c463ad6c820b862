//! Cliente HTTP para a API do Active Collab

use crate::error::{ActiveCollabError, Result};
use crate::token::Token;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde_json::{Map, Value};
use std::time::Duration;

/// Header de autenticação aceito pela API
const AUTH_HEADER: &str = "X-Angie-AuthApiToken";

/// Parâmetros de uma chamada (query string em GET/HEAD, corpo JSON nos demais)
pub type Params = Map<String, Value>;

/// Resposta crua de uma chamada bem sucedida (status 2xx)
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Corpo parseado como JSON; corpo vazio (ex.: HEAD) vira `Value::Null`
    pub fn json(&self) -> Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Uma operação por verbo HTTP
#[async_trait]
pub trait Connector: Send + Sync {
    async fn get(&self, path: &str, params: &Params) -> Result<Response>;
    async fn post(&self, path: &str, params: &Params) -> Result<Response>;
    async fn head(&self, path: &str, params: &Params) -> Result<Response>;
    async fn put(&self, path: &str, params: &Params) -> Result<Response>;
    async fn patch(&self, path: &str, params: &Params) -> Result<Response>;
    async fn delete(&self, path: &str, params: &Params) -> Result<Response>;
}

/// Monta o `reqwest::Client` usado pelo autenticador e pelo cliente
pub(crate) fn build_http_client(
    ssl_verify_peer: bool,
    timeout: Duration,
    connect_timeout: Duration,
) -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .danger_accept_invalid_certs(!ssl_verify_peer)
        .build()
        .map_err(|e| ActiveCollabError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

/// Cliente vinculado a um [`Token`]
#[derive(Clone, Debug)]
pub struct Client {
    http_client: HttpClient,
    token: Token,
    base_url: String,
    ssl_verify_peer: bool,
}

impl Client {
    /// Cria um novo cliente
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(token: Token, ssl_verify_peer: bool) -> Result<Self> {
        Self::with_timeouts(token, ssl_verify_peer, 30, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        token: Token,
        ssl_verify_peer: bool,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = build_http_client(
            ssl_verify_peer,
            Duration::from_secs(total_timeout_secs),
            Duration::from_secs(connect_timeout_secs),
        )?;

        Ok(Self {
            http_client,
            base_url: token.api_url(),
            token,
            ssl_verify_peer,
        })
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// URL raiz da API (`{url}/api/v{versão}`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ssl_verify_peer(&self) -> bool {
        self.ssl_verify_peer
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn call(&self, method: Method, path: &str, params: &Params) -> Result<Response> {
        let sends_query = method == Method::GET || method == Method::HEAD;

        let mut url = self.build_url(path);
        if sends_query && !params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            url = format!("{}{}{}", url, separator, encode_query(params));
        }

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(AUTH_HEADER, self.token.token())
            .header("Content-Type", "application/json");

        if !sends_query {
            request = request.json(params);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: reqwest::Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return Ok(Response::new(status.as_u16(), body));
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        tracing::error!("Active Collab API error ({}): {}", status_code, body);

        // Tentar extrair mensagem de erro do JSON
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .or_else(|| json.get("error"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        Err(ActiveCollabError::ApiError {
            status: status_code,
            message,
        })
    }
}

#[async_trait]
impl Connector for Client {
    async fn get(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::GET, path, params).await
    }

    async fn post(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::POST, path, params).await
    }

    async fn head(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::HEAD, path, params).await
    }

    async fn put(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::PUT, path, params).await
    }

    async fn patch(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::PATCH, path, params).await
    }

    async fn delete(&self, path: &str, params: &Params) -> Result<Response> {
        self.call(Method::DELETE, path, params).await
    }
}

/// Serializa parâmetros escalares como query string; arrays e objetos vão como JSON
fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(&value))
        })
        .collect::<Vec<_>>()
        .join("&")
}
