use thiserror::Error;

/// Erros de uso do componente
///
/// Falhas de rede, autenticação ou da API nunca chegam aqui: são
/// registradas em `request_errors()` e a requisição devolve resultado vazio.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Verbo HTTP fora de get/post/head/put/patch/delete
    #[error("Invalid HTTP request type: {0}")]
    InvalidRequestType(String),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComponentError::InvalidRequestType("trace".to_string());
        assert_eq!(err.to_string(), "Invalid HTTP request type: trace");
    }
}
