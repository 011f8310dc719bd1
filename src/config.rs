//! Server configuration.
//!
//! Values come from the environment with sensible defaults so the binary
//! runs out of the box on the port the portal UI expects.

/// Environment variable overriding the bind host.
pub const ENV_HOST: &str = "PORTAL_MOCK_HOST";

/// Environment variable overriding the bind port.
pub const ENV_PORT: &str = "PORTAL_MOCK_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3500;

/// Bind configuration for the mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build a config from `PORTAL_MOCK_HOST` / `PORTAL_MOCK_PORT`,
    /// falling back to the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var(ENV_HOST).unwrap_or(defaults.host);
        let port = std::env::var(ENV_PORT)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    /// Config bound to an OS-assigned port, for tests that run many
    /// servers side by side.
    pub fn ephemeral() -> Self {
        Self {
            port: 0,
            ..Self::default()
        }
    }

    /// The address string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
