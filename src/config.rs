use anyhow::{anyhow, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub paystack: PaystackConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct PaystackConfig {
    /// Paystack API secret key. Absence is not a startup failure; the payment
    /// operations report it as a precondition fault on first use.
    pub secret_key: Option<String>,
    /// Paystack API base URL (defaults to https://api.paystack.co).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        let secret_key = env::var("PAYSTACK_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let paystack = PaystackConfig {
            secret_key,
            base_url: env::var("PAYSTACK_BASE_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".to_string()),
            timeout_secs: env::var("PAYSTACK_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("PAYSTACK_TIMEOUT_SECS must be a valid number")?,
        };

        let config = Config { server, paystack };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&self.server.environment.as_str()) {
            return Err(anyhow!(
                "Environment must be one of: {:?}, got {}",
                valid_environments,
                self.server.environment
            ));
        }

        if self.paystack.base_url.trim().is_empty() {
            return Err(anyhow!("PAYSTACK_BASE_URL cannot be empty"));
        }

        if self.paystack.timeout_secs == 0 {
            return Err(anyhow!("PAYSTACK_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }
}
