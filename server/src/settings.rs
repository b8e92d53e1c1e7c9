use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Database {
    /// SQLite connection URL, e.g. `sqlite://notes.db?mode=rwc`.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    /// Token-signing secret. Override in production via `AUTH_SECRET`.
    pub secret: String,
    /// Token lifetime in minutes.
    pub lifetime: i64,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub auth: Auth,
    pub server: Server,
}

impl Settings {
    /// Layered load: hard defaults, then an optional `config.toml`, then the
    /// environment (`DATABASE_URL`, `AUTH_SECRET`, `AUTH_LIFETIME`,
    /// `SERVER_HOST`, `SERVER_PORT`).
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.url", "sqlite://notes.db?mode=rwc")?
            .set_default("auth.secret", "insecure-dev-secret")?
            .set_default("auth.lifetime", 30_i64)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}
