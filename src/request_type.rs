//! Verbos HTTP aceitos pelo componente

use crate::utils::error::ComponentError;
use std::fmt;
use std::str::FromStr;

/// Tipo de requisição HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestType {
    #[default]
    Get,
    Post,
    Head,
    Put,
    Patch,
    Delete,
}

impl RequestType {
    /// Todos os verbos aceitos
    pub const ALL: [RequestType; 6] = [
        RequestType::Delete,
        RequestType::Get,
        RequestType::Head,
        RequestType::Patch,
        RequestType::Post,
        RequestType::Put,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Get => "get",
            RequestType::Post => "post",
            RequestType::Head => "head",
            RequestType::Put => "put",
            RequestType::Patch => "patch",
            RequestType::Delete => "delete",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        RequestType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ComponentError::InvalidRequestType(s.to_string()))
    }
}
