use clap::Parser;
use clap::ValueEnum;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "vibecord-api")]
#[command(about = "VibeCord chat API server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub server: ServerConfig,

    #[arg(
        long = "environment",
        env = "ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: Environment,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: Option<String>,

    #[arg(long = "database-name", env = "DATABASE_NAME")]
    pub name: Option<String>,

    #[arg(long = "store", env = "STORE", value_enum, default_value = "mongo")]
    pub store: StoreKind,
}

#[derive(Clone, Parser, Debug)]
pub struct ServerConfig {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value = "8000")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Mongo,
    /// Process-local store, contents are lost on exit
    Memory,
}

#[derive(Clone, Debug, ValueEnum, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}
