//! Service configuration from environment variables.

use serde::Deserialize;

/// Runtime configuration, deserialized from the environment.
///
/// `ML_PORT`, `DATABASE_URL`, and `MAX_CONNECTIONS` are read with the
/// defaults below; a `.env` file is honored when present.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub ml_port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "mysql://root@localhost/skillforge".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
