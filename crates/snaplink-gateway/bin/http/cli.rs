use clap::{Parser, ValueEnum};
use snaplink_gateway::Environment;
use snaplink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNAPLINK_LISTEN_ADDR";
pub const ENVIRONMENT_ENV: &str = "SNAPLINK_ENVIRONMENT";
pub const STORAGE_BACKEND_ENV: &str = "SNAPLINK_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "SNAPLINK_REDIS_URL";
pub const GENERATOR_ENV: &str = "SNAPLINK_GENERATOR";
pub const CODE_LENGTH_ENV: &str = "SNAPLINK_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNAPLINK_MAX_ATTEMPTS";
pub const ALLOCATE_TIMEOUT_MS_ENV: &str = "SNAPLINK_ALLOCATE_TIMEOUT_MS";
pub const DEFAULT_HOST_ENV: &str = "SNAPLINK_DEFAULT_HOST";
pub const FALLBACK_LOCATION_ENV: &str = "SNAPLINK_FALLBACK_LOCATION";
pub const LOG_FORMAT_ENV: &str = "SNAPLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snaplink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = ENVIRONMENT_ENV,
        value_enum,
        default_value_t = Environment::Development
    )]
    pub environment: Environment,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = snaplink_core::shortcode::DEFAULT_LENGTH)]
    pub code_length: usize,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = snaplink_shortener::policy::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(long, env = ALLOCATE_TIMEOUT_MS_ENV)]
    pub allocate_timeout_ms: Option<u64>,

    #[arg(long, env = DEFAULT_HOST_ENV, default_value = snaplink_gateway::config::DEFAULT_HOST)]
    pub default_host: String,

    #[arg(
        long,
        env = FALLBACK_LOCATION_ENV,
        default_value = snaplink_gateway::config::DEFAULT_FALLBACK_LOCATION
    )]
    pub fallback_location: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
