//! # Server settings
//!
//! Layered with the `config` crate, later sources overriding earlier ones:
//!
//! 1. built-in defaults (below),
//! 2. an optional `config.toml` in the working directory,
//! 3. environment variables prefixed `MARKET_`, with `_` between path segments
//!    (`MARKET_DATABASE_URL`, `MARKET_SERVER_PORT`, `MARKET_SESSION_SECURE`, ...).
//!
//! A `.env` file is loaded first, so it can provide any of those variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
    pub connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://market.db".into(),
            connections: 5,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    /// Send the session cookie only over HTTPS.
    pub secure: bool,
    /// Days of inactivity before a session expires.
    pub lifetime: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            lifetime: 7,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("database.url", "sqlite://market.db")?
            .set_default("database.connections", 5)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("session.secure", false)?
            .set_default("session.lifetime", 7)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("MARKET")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
