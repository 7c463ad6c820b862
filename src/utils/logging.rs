use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Instala o subscriber `fmt` com filtro de `RUST_LOG` (padrão `info`)
///
/// Pode ser chamado mais de uma vez; só a primeira chamada tem efeito.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn log_request_started(method: &str, path: &str) {
    debug!("[ActiveCollab] {} {}", method.to_uppercase(), path);
}

pub fn log_response_received(path: &str, status: u16) {
    debug!("[ActiveCollab] {} - Status: {}", path, status);
}

pub fn log_token_issued(url: &str) {
    info!("✅ [ActiveCollab] Token emitido para {}", url);
}

pub fn log_token_undefined(reason: &str) {
    error!("❌ [ActiveCollab] Token não obtido: {}", reason);
}

pub fn log_client_ready(base_url: &str) {
    info!("✅ [ActiveCollab] Cliente pronto: {}", base_url);
}

pub fn log_client_not_ready(reason: &str) {
    error!("❌ [ActiveCollab] Cliente não pôde ser criado: {}", reason);
}

pub fn log_api_error(path: &str, status: u16, error: &str) {
    error!("[ActiveCollab] API error: {} - Status: {} - Error: {}", path, status, error);
}

pub fn log_invalid_properties(path: &str) {
    warn!("[ActiveCollab] Resposta com code=0 em {}", path);
}
