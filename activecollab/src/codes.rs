//! Códigos HTTP de falha reconhecidos pela API do Active Collab
//!
//! Qualquer outro status devolvido pela API é propagado como está em
//! [`ActiveCollabError::http_code`](crate::ActiveCollabError::http_code).

/// Requisição malformada
pub const BAD_REQUEST: u16 = 400;

/// Token ausente, expirado ou inválido
pub const UNAUTHORIZED: u16 = 401;

/// Ação proibida para o usuário do token
pub const FORBIDDEN: u16 = 403;

/// Recurso ou método inexistente
pub const NOT_FOUND: u16 = 404;

/// Conflito de estado no servidor
pub const CONFLICT: u16 = 409;

/// Propriedades inválidas na requisição
pub const INVALID_PROPERTIES: u16 = 422;

/// Operação falhou no servidor
pub const OPERATION_FAILED: u16 = 500;

/// Serviço indisponível (também usado para falhas de transporte sem status)
pub const UNAVAILABLE: u16 = 503;
