use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use typed_builder::TypedBuilder;

pub const DEFAULT_HOST: &str = "localhost:3000";
pub const DEFAULT_FALLBACK_LOCATION: &str = "/";

/// Deployment environment. Decides the scheme of published short links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[value(name = "production")]
    Production,
    #[default]
    #[value(name = "development")]
    Development,
}

impl Environment {
    pub fn scheme(&self) -> &'static str {
        match self {
            Environment::Production => "https",
            Environment::Development => "http",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

/// Settings of the HTTP boundary, fixed at startup.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewayConfig {
    #[builder(default)]
    pub environment: Environment,
    /// Host used for short links when a request carries no usable `Host` header.
    #[builder(default = DEFAULT_HOST.to_string(), setter(into))]
    pub default_host: String,
    /// Where redirects go when a short code cannot be resolved.
    #[builder(default = DEFAULT_FALLBACK_LOCATION.to_string(), setter(into))]
    pub fallback_location: String,
}

impl GatewayConfig {
    /// Builds the externally visible base URL, e.g. `https://snap.link`.
    pub fn public_base_url(&self, host: Option<&str>) -> String {
        let host = host
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .unwrap_or(&self.default_host);
        format!("{}://{}", self.environment.scheme(), host)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_environment() {
        assert_eq!(Environment::Production.scheme(), "https");
        assert_eq!(Environment::Development.scheme(), "http");
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn base_url_prefers_request_host() {
        let config = GatewayConfig::builder()
            .environment(Environment::Production)
            .build();

        assert_eq!(config.public_base_url(Some("snap.link")), "https://snap.link");
        assert_eq!(config.public_base_url(None), "https://localhost:3000");
        assert_eq!(config.public_base_url(Some("  ")), "https://localhost:3000");
    }

    #[test]
    fn defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.default_host, "localhost:3000");
        assert_eq!(config.fallback_location, "/");
        assert_eq!(config.environment, Environment::Development);
    }
}
