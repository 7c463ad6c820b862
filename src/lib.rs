// Componente de integração com a API do Active Collab self-hosted
// Expõe módulos para uso em testes e por quem embute o componente

pub mod backend;
pub mod component;
pub mod config;
pub mod errors;
pub mod request_type;
pub mod utils;

pub use activecollab::{Params, Token};
pub use backend::{SdkBackend, SelfHostedBackend};
pub use component::ActiveCollab;
pub use config::ActiveCollabSettings;
pub use errors::{error_message, RequestErrors, ERROR_CLIENT_NOT_READY, ERROR_TOKEN_UNDEFINED};
pub use request_type::RequestType;
pub use utils::{ComponentError, ComponentResult};
