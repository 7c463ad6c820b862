//! Componente de acesso à API do Active Collab
//!
//! Fluxo de uma requisição:
//!
//! 1. limpa os erros da requisição anterior
//! 2. valida o verbo HTTP
//! 3. autenticador → token → cliente (criados uma vez e reaproveitados)
//! 4. executa a chamada e devolve o JSON, ou `{}` com o erro registrado
//!
//! Falhas de rede, autenticação e da API nunca viram `Err`: quem chama olha o
//! resultado (vazio ou não) e consulta [`ActiveCollab::request_errors`].

use crate::backend::{SdkBackend, SelfHostedBackend};
use crate::config::ActiveCollabSettings;
use crate::errors::{
    error_message, RequestErrors, ERROR_CLIENT_NOT_READY, ERROR_TOKEN_UNDEFINED,
    INVALID_PROPERTIES,
};
use crate::request_type::RequestType;
use crate::utils::error::ComponentResult;
use crate::utils::logging::*;
use activecollab::{Authenticator, Connector, Params, Token};
use serde_json::{Map, Value};

/// Valor memoizado: presente ou ausente (falha já registrada)
#[derive(Debug, Clone, PartialEq)]
enum Cached<T> {
    Present(T),
    Absent,
}

impl<T> Cached<T> {
    fn present(&self) -> Option<&T> {
        match self {
            Cached::Present(value) => Some(value),
            Cached::Absent => None,
        }
    }
}

/// Resultado vazio devolvido em qualquer falha registrada
fn empty_result() -> Value {
    Value::Object(Map::new())
}

/// `code` igual a zero na resposta indica falha da aplicação
///
/// A comparação é frouxa: `0`, `0.0`, `"0"` e `false` contam como zero.
/// Strings não numéricas (`"abc"`, `""`) e `null` não contam.
fn has_failure_code(data: &Value) -> bool {
    match data.get("code") {
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|n| n == 0.0).unwrap_or(false),
        Some(Value::Bool(b)) => !b,
        _ => false,
    }
}

/// Componente de integração com uma instância self-hosted
///
/// Uma instância por sessão: não há sincronização interna e todas as
/// operações que mexem no cache pedem `&mut self`.
pub struct ActiveCollab<B: SdkBackend = SelfHostedBackend> {
    settings: ActiveCollabSettings,
    backend: B,
    authenticator: Option<B::Authenticator>,
    token: Option<Cached<Token>>,
    client: Option<Cached<B::Client>>,
    request_errors: RequestErrors,
}

impl ActiveCollab<SelfHostedBackend> {
    pub fn new(settings: ActiveCollabSettings) -> Self {
        Self::with_backend(settings, SelfHostedBackend)
    }
}

impl<B: SdkBackend> ActiveCollab<B> {
    pub fn with_backend(settings: ActiveCollabSettings, backend: B) -> Self {
        Self {
            settings,
            backend,
            authenticator: None,
            token: None,
            client: None,
            request_errors: RequestErrors::new(),
        }
    }

    /// Erros da última requisição
    pub fn request_errors(&self) -> &RequestErrors {
        &self.request_errors
    }

    /// Autenticador (criado no primeiro acesso)
    fn authenticator(&mut self) -> &B::Authenticator {
        let backend = &self.backend;
        let settings = &self.settings;
        self.authenticator
            .get_or_insert_with(|| backend.authenticator(settings))
    }

    /// Token de acesso
    ///
    /// No primeiro acesso pede um token ao autenticador. Sem token, registra
    /// [`ERROR_TOKEN_UNDEFINED`] e devolve `None`; a falha fica em cache.
    async fn token(&mut self) -> Option<Token> {
        if self.token.is_none() {
            let result = self.authenticator().issue_token().await;
            let issued = match result {
                Ok(token) => {
                    log_token_issued(token.url());
                    Cached::Present(token)
                }
                Err(err) => {
                    log_token_undefined(&err.to_string());
                    Cached::Absent
                }
            };
            self.token = Some(issued);
        }

        match self.token.as_ref().and_then(Cached::present) {
            Some(token) => Some(token.clone()),
            None => {
                self.add_request_error(ERROR_TOKEN_UNDEFINED);
                None
            }
        }
    }

    /// Cliente da API
    ///
    /// Criado uma única vez. Sem token, o cliente fica ausente em cache (o
    /// token já registrou o erro). Se o token existe mas o cliente não pode
    /// ser montado, registra [`ERROR_CLIENT_NOT_READY`].
    async fn client(&mut self) -> Option<&B::Client> {
        if self.client.is_none() {
            let token = self.token().await;
            let cached = match token {
                Some(token) => match self.backend.client(&token, &self.settings) {
                    Ok(client) => {
                        log_client_ready(&token.api_url());
                        Cached::Present(client)
                    }
                    Err(err) => {
                        log_client_not_ready(&err.to_string());
                        self.add_request_error(ERROR_CLIENT_NOT_READY);
                        Cached::Absent
                    }
                },
                None => Cached::Absent,
            };
            self.client = Some(cached);
        }

        self.client.as_ref().and_then(Cached::present)
    }

    /// Executa uma requisição com o verbo informado como texto
    ///
    /// Os erros da requisição anterior são limpos antes de validar o verbo.
    /// Verbo desconhecido é erro de uso e volta como `Err`; qualquer outra
    /// falha volta como `{}` com o código em [`Self::request_errors`].
    pub async fn request(
        &mut self,
        path: &str,
        params: &Params,
        request_type: &str,
    ) -> ComponentResult<Value> {
        self.flush_request_errors();

        let request_type = request_type.parse::<RequestType>()?;

        Ok(self.dispatch(path, params, request_type).await)
    }

    /// Executa uma requisição com verbo tipado
    pub async fn send(&mut self, path: &str, params: &Params, request_type: RequestType) -> Value {
        self.flush_request_errors();
        self.dispatch(path, params, request_type).await
    }

    pub async fn get(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Get).await
    }

    pub async fn post(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Post).await
    }

    pub async fn head(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Head).await
    }

    pub async fn put(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Put).await
    }

    pub async fn patch(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Patch).await
    }

    pub async fn delete(&mut self, path: &str, params: &Params) -> Value {
        self.send(path, params, RequestType::Delete).await
    }

    /// Descarta autenticador, token e cliente; a próxima requisição autentica de novo
    pub fn reset(&mut self) {
        tracing::info!("🗑️ [ActiveCollab] Autenticador, token e cliente descartados");
        self.authenticator = None;
        self.token = None;
        self.client = None;
    }

    async fn dispatch(&mut self, path: &str, params: &Params, request_type: RequestType) -> Value {
        let Some(client) = self.client().await else {
            return empty_result();
        };

        log_request_started(request_type.as_str(), path);

        let response = match request_type {
            RequestType::Get => client.get(path, params).await,
            RequestType::Post => client.post(path, params).await,
            RequestType::Head => client.head(path, params).await,
            RequestType::Put => client.put(path, params).await,
            RequestType::Patch => client.patch(path, params).await,
            RequestType::Delete => client.delete(path, params).await,
        };

        let data = response.and_then(|response| {
            log_response_received(path, response.status());
            response.json()
        });

        match data {
            Ok(data) if has_failure_code(&data) => {
                log_invalid_properties(path);
                self.add_request_error(INVALID_PROPERTIES);
                empty_result()
            }
            Ok(data) => data,
            Err(err) => {
                let code = err.http_code();
                log_api_error(path, code, &err.to_string());
                self.add_request_error(code);
                empty_result()
            }
        }
    }

    fn flush_request_errors(&mut self) {
        self.request_errors.clear();
    }

    fn add_request_error(&mut self, code: u16) {
        self.request_errors
            .insert(code, error_message(code).to_string());
    }
}
