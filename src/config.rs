use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().expect("FATAL: failed to load configuration from environment")
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// sqlx connection string for the quotes database.
    pub database_url: String,
    pub listen_addr: String,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set.
    pub loglevel: String,
    pub max_connections: u32,
    /// Upper bound for the `limit` query parameter on list requests.
    pub max_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://quotes.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            max_limit: 100,
        }
    }
}

impl Config {
    /// Defaults, then `DATABASE_URL` / `LOGLEVEL`, then `INSPIRE_*` overrides.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["database_url", "loglevel"]))
            .merge(Env::prefixed("INSPIRE_"))
    }
}
