//! Cliente enxuto da API do Active Collab (self-hosted)
//!
//! Fornece só o necessário para o componente de integração:
//!
//! - [`SelfHosted`]: troca usuário/senha por um [`Token`] via `issue-token`
//! - [`Client`]: uma chamada por verbo HTTP, autenticada pelo token
//! - [`ActiveCollabError`]: erros com código HTTP associado ([`codes`])
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use activecollab::{Authenticator, Client, Connector, SelfHosted};
//!
//! #[tokio::main]
//! async fn main() -> activecollab::Result<()> {
//!     let mut auth = SelfHosted::new("ACME", "Middleware", "bot@acme.com", "senha", "https://ac.acme.com", 5);
//!     auth.set_ssl_verify_peer(true);
//!
//!     let token = auth.issue_token().await?;
//!     let client = Client::new(token, true)?;
//!     let projects = client.get("projects", &Default::default()).await?.json()?;
//!
//!     Ok(())
//! }
//! ```

pub mod authenticator;
pub mod client;
pub mod codes;
pub mod error;
pub mod token;

// Re-exports principais
pub use authenticator::{Authenticator, SelfHosted};
pub use client::{Client, Connector, Params, Response};
pub use error::{ActiveCollabError, Result};
pub use token::Token;
