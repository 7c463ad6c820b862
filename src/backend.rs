//! Construção do autenticador e do cliente
//!
//! O componente não instancia `SelfHosted`/`Client` diretamente: pede a um
//! [`SdkBackend`]. Em produção é o [`SelfHostedBackend`]; em testes, um
//! backend falso que conta construções.

use crate::config::ActiveCollabSettings;
use activecollab::{Authenticator, Client, Connector, SelfHosted, Token};

pub trait SdkBackend: Send + Sync {
    type Authenticator: Authenticator;
    type Client: Connector;

    /// Cria o autenticador já com a verificação TLS aplicada
    fn authenticator(&self, settings: &ActiveCollabSettings) -> Self::Authenticator;

    /// Cria o cliente vinculado ao token, com a verificação TLS aplicada
    fn client(
        &self,
        token: &Token,
        settings: &ActiveCollabSettings,
    ) -> activecollab::Result<Self::Client>;
}

/// Backend real: `issue-token` + cliente HTTP via reqwest
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfHostedBackend;

impl SdkBackend for SelfHostedBackend {
    type Authenticator = SelfHosted;
    type Client = Client;

    fn authenticator(&self, settings: &ActiveCollabSettings) -> SelfHosted {
        let mut authenticator = SelfHosted::new(
            settings.company_name.as_str(),
            settings.application_name.as_str(),
            settings.user.as_str(),
            settings.password.as_str(),
            settings.ac_url.as_str(),
            settings.api_version,
        );
        authenticator.set_ssl_verify_peer(settings.ssl_verify);
        authenticator.set_timeouts(settings.timeout_secs, settings.connect_timeout_secs);
        authenticator
    }

    fn client(&self, token: &Token, settings: &ActiveCollabSettings) -> activecollab::Result<Client> {
        Client::with_timeouts(
            token.clone(),
            settings.ssl_verify,
            settings.timeout_secs,
            settings.connect_timeout_secs,
        )
    }
}
