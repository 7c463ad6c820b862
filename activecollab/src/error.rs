//! Tipos de erro para o crate activecollab

use crate::codes;
use thiserror::Error;

/// Erros do cliente Active Collab
#[derive(Debug, Error)]
pub enum ActiveCollabError {
    /// Erro de transporte HTTP (conexão, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do Active Collab (status code não-2xx)
    #[error("Active Collab API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Falha na emissão do token
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração (URL inválida, cliente HTTP não construído)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ActiveCollabError {
    /// Código HTTP associado ao erro
    ///
    /// - `ApiError`: o status devolvido pela API
    /// - `HttpError`: o status da resposta, quando houver; senão [`codes::UNAVAILABLE`]
    /// - `JsonError`: [`codes::OPERATION_FAILED`]
    /// - `AuthError`: [`codes::UNAUTHORIZED`]
    /// - `ConfigError`: [`codes::BAD_REQUEST`]
    pub fn http_code(&self) -> u16 {
        match self {
            Self::ApiError { status, .. } => *status,
            Self::HttpError(err) => err
                .status()
                .map(|s| s.as_u16())
                .unwrap_or(codes::UNAVAILABLE),
            Self::JsonError(_) => codes::OPERATION_FAILED,
            Self::AuthError(_) => codes::UNAUTHORIZED,
            Self::ConfigError(_) => codes::BAD_REQUEST,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ActiveCollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status() {
        let err = ActiveCollabError::ApiError {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.http_code(), codes::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "Active Collab API error (status 404): Not Found"
        );
    }

    #[test]
    fn test_json_error_maps_to_operation_failed() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err = ActiveCollabError::from(json_error);
        assert_eq!(err.http_code(), codes::OPERATION_FAILED);
        assert!(err.to_string().starts_with("JSON parsing failed"));
    }

    #[test]
    fn test_auth_and_config_codes() {
        assert_eq!(
            ActiveCollabError::AuthError("is_ok=false".into()).http_code(),
            codes::UNAUTHORIZED
        );
        assert_eq!(
            ActiveCollabError::ConfigError("bad url".into()).http_code(),
            codes::BAD_REQUEST
        );
    }
}
