use crate::connectors::IdentityServiceConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    pub identity: IdentityServiceConfig,
}

fn default_static_dir() -> String {
    "static".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?;

    let mut config: Settings = settings.try_deserialize()?;

    // PORT overrides the configured port when set
    if let Ok(port) = std::env::var("PORT") {
        config.app_port = port
            .parse::<u16>()
            .map_err(|_| config::ConfigError::Message("PORT must be a port number".to_string()))?;
    }

    // Identity provider keys come from the environment only
    config.identity.secret_key = std::env::var("IDENTITY_SECRET_KEY")
        .map_err(|_| config::ConfigError::NotFound("IDENTITY_SECRET_KEY".to_string()))?;
    config.identity.publishable_key = std::env::var("IDENTITY_PUBLISHABLE_KEY")
        .map_err(|_| config::ConfigError::NotFound("IDENTITY_PUBLISHABLE_KEY".to_string()))?;

    Ok(config)
}
