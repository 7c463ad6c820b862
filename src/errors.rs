//! Tabela de erros de requisição (código → mensagem)
//!
//! Contém os dois códigos internos do componente e os códigos HTTP de falha
//! da API. Códigos desconhecidos caem na mensagem de serviço indisponível:
//!
//! ```
//! use activecollab_component::errors::{error_message, UNAVAILABLE};
//!
//! assert_eq!(error_message(9999), error_message(UNAVAILABLE));
//! ```

use activecollab::codes;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub use activecollab::codes::{
    BAD_REQUEST, CONFLICT, FORBIDDEN, INVALID_PROPERTIES, NOT_FOUND, OPERATION_FAILED,
    UNAUTHORIZED, UNAVAILABLE,
};

/// Token de acesso não obtido
pub const ERROR_TOKEN_UNDEFINED: u16 = 99;

/// Cliente da API não está pronto
///
/// Registrado só quando há token mas o cliente HTTP não pôde ser montado.
/// Sem token, a requisição registra apenas [`ERROR_TOKEN_UNDEFINED`].
pub const ERROR_CLIENT_NOT_READY: u16 = 100;

/// Erros da última requisição, ordenados por código
pub type RequestErrors = BTreeMap<u16, String>;

static ERRORS_DESCRIPTION: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (ERROR_TOKEN_UNDEFINED, "Access token is not defined"),
        (ERROR_CLIENT_NOT_READY, "API client is not ready"),
        (codes::BAD_REQUEST, "Bad HTTP request to the API"),
        (codes::INVALID_PROPERTIES, "Invalid HTTP request parameters"),
        (codes::UNAUTHORIZED, "Token session expired or client is not authorized"),
        (codes::FORBIDDEN, "API action or method is forbidden"),
        (codes::NOT_FOUND, "API action or method not found"),
        (codes::CONFLICT, "Conflict while calling the API"),
        (codes::OPERATION_FAILED, "API action or method is temporarily unavailable"),
        (codes::UNAVAILABLE, "API service is temporarily unavailable"),
    ])
});

/// Mensagem do código; códigos não registrados usam a de [`UNAVAILABLE`]
pub fn error_message(code: u16) -> &'static str {
    ERRORS_DESCRIPTION
        .get(&code)
        .or_else(|| ERRORS_DESCRIPTION.get(&codes::UNAVAILABLE))
        .copied()
        .unwrap_or_default()
}
