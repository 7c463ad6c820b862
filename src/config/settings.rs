use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Versão da API usada quando não configurada
pub const DEFAULT_API_VERSION: u32 = 5;

fn default_api_version() -> u32 {
    DEFAULT_API_VERSION
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

/// Credenciais e parâmetros de acesso a uma instância self-hosted
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct ActiveCollabSettings {
    /// Nome da empresa (enviado como `client_vendor`)
    #[serde(default)]
    pub company_name: String,
    /// Nome da aplicação (enviado como `client_name`)
    #[serde(default)]
    pub application_name: String,
    /// Usuário (email) que faz login na API
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// URL da instância self-hosted
    #[serde(default)]
    pub ac_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// Verificação do certificado TLS do servidor
    #[serde(default)]
    pub ssl_verify: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ActiveCollabSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            application_name: String::new(),
            user: String::new(),
            password: String::new(),
            ac_url: String::new(),
            api_version: DEFAULT_API_VERSION,
            ssl_verify: false,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ActiveCollabSettings {
    pub fn new(
        company_name: impl Into<String>,
        application_name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        ac_url: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            application_name: application_name.into(),
            user: user.into(),
            password: password.into(),
            ac_url: ac_url.into(),
            ..Self::default()
        }
    }

    /// Carrega de `config/default`, `config/{RUN_MODE}` e variáveis `ACTIVECOLLAB_*`
    ///
    /// Um `.env` no diretório atual é lido antes, se existir.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
        }

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("ACTIVECOLLAB").try_parsing(true));

        let settings = Self::from_builder(builder)?;
        tracing::info!("Configuration loaded successfully for environment: {}", run_mode);
        Ok(settings)
    }

    /// Constrói a partir de fontes já montadas
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;

        if settings.ac_url.trim().is_empty() {
            return Err(ConfigError::Message("ac_url não configurado".to_string()));
        }

        Ok(settings)
    }
}

impl fmt::Debug for ActiveCollabSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveCollabSettings")
            .field("company_name", &self.company_name)
            .field("application_name", &self.application_name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("ac_url", &self.ac_url)
            .field("api_version", &self.api_version)
            .field("ssl_verify", &self.ssl_verify)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
