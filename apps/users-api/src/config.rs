use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_flag, server::ServerConfig};

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Seed the store with the three demo users (`SEED_SAMPLE_DATA`)
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // defaults: HOST=0.0.0.0, PORT=8000
        let cors = CorsConfig::from_env()?;
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_sample_data,
        })
    }
}
