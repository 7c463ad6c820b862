//! Token de acesso emitido pelo endpoint `issue-token`

use std::fmt;

/// Credencial opaca exigida para construir um [`Client`](crate::Client)
///
/// Guarda o token da API junto com a URL da instância e a versão da API,
/// que é tudo que o cliente precisa para montar as requisições.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    token: String,
    url: String,
    api_version: u32,
}

impl Token {
    pub fn new(token: impl Into<String>, url: impl Into<String>, api_version: u32) -> Self {
        Self {
            token: token.into(),
            url: url.into().trim_end_matches('/').to_string(),
            api_version,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// URL base da instância self-hosted (sem barra final)
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// URL raiz da API: `{url}/api/v{versão}`
    pub fn api_url(&self) -> String {
        format!("{}/api/v{}", self.url, self.api_version)
    }
}

// O token nunca aparece em logs
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token", &"***")
            .field("url", &self.url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
