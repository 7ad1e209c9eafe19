use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub sqlite_path: String,
    pub cors_origin: String,
    pub secure_cookies: bool,
    /// Artificial latency of the demo login call.
    pub login_delay: Duration,
    /// Artificial latency of the demo registration call.
    pub register_delay: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("SERVER_PORT must be a valid port number: {e}"))?,
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "./data/mentrify.db".to_string()),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            secure_cookies: env::var("SECURE_COOKIES")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            login_delay: millis_from_env("LOGIN_DELAY_MS", 1000),
            register_delay: millis_from_env("REGISTER_DELAY_MS", 1500),
        })
    }

    /// Configuration with no artificial delays, used by tests and local tooling.
    pub fn immediate() -> Self {
        Self {
            server_port: 0,
            sqlite_path: ":memory:".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
            secure_cookies: false,
            login_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let millis = env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_millis(millis)
}
