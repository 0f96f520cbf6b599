/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `API_PRODUCTION`: Enables HSTS (default: false)
/// - `MAX_UPLOAD_BODY_BYTES`: Body limit for the application upload (default: 16 MiB)
/// - `SITE_ANON_KEY`: Bearer credential required on submissions (optional)
/// - `RESEND_API_KEY`: Resend API key (optional; email features degrade without it)
/// - `RESEND_API_URL`: Resend endpoint (default: https://api.resend.com/emails)
/// - `MAIL_FROM`: Sender (default: `ShiftORL <info@shiftorl.site>`)
/// - `MAIL_INFO_TO`: Inbox for contact and application mail (default: info@shiftorl.site)
/// - `MAIL_HIRE_TO`: Inbox for hiring inquiries (default: hire@shiftorl.site)
/// - `RUST_LOG`: Log level (default: shiftorl_api=debug,shiftorl_shared=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use shiftorl_api::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}:{}", config.api.host, config.api.port);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use shiftorl_shared::email::{MailRoutes, ResendMailer};
use std::env;

/// Default request body limit for `/submit-application`; must stay above the
/// 10 MiB resume limit so oversized files reach the size check
pub const DEFAULT_MAX_UPLOAD_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Outbound email configuration
    pub email: EmailConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Production mode (HSTS on)
    pub production: bool,

    /// Body limit for the multipart application route
    pub max_upload_body_bytes: usize,

    /// Static bearer credential the site sends with submissions
    #[serde(skip_serializing)]
    pub anon_key: Option<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Outbound email configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; `None` disables sending
    #[serde(skip_serializing)]
    pub resend_api_key: Option<String>,

    pub resend_api_url: String,
    pub from: String,
    pub info_to: String,
    pub hire_to: String,
}

impl EmailConfig {
    pub fn routes(&self) -> MailRoutes {
        MailRoutes {
            from: self.from.clone(),
            info_to: self.info_to.clone(),
            hire_to: self.hire_to.clone(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        let routes = MailRoutes::default();
        Self {
            resend_api_key: None,
            resend_api_url: ResendMailer::DEFAULT_ENDPOINT.to_string(),
            from: routes.from,
            info_to: routes.info_to,
            hire_to: routes.hire_to,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is missing
    /// - A numeric or boolean variable has an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let api_port = var("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("API_PORT is invalid: {}", e))?;

        let production = match var("API_PRODUCTION").as_deref() {
            None => false,
            Some("1") | Some("true") | Some("TRUE") | Some("True") => true,
            Some("0") | Some("false") | Some("FALSE") | Some("False") => false,
            Some(other) => anyhow::bail!("API_PRODUCTION must be true or false, got {:?}", other),
        };

        let max_upload_body_bytes = match var("MAX_UPLOAD_BODY_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("MAX_UPLOAD_BODY_BYTES is invalid: {}", e))?,
            None => DEFAULT_MAX_UPLOAD_BODY_BYTES,
        };

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("DATABASE_MAX_CONNECTIONS is invalid: {}", e))?;

        let defaults = EmailConfig::default();
        let email = EmailConfig {
            resend_api_key: var("RESEND_API_KEY"),
            resend_api_url: var("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
            from: var("MAIL_FROM").unwrap_or(defaults.from),
            info_to: var("MAIL_INFO_TO").unwrap_or(defaults.info_to),
            hire_to: var("MAIL_HIRE_TO").unwrap_or(defaults.hire_to),
        };

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                production,
                max_upload_body_bytes,
                anon_key: var("SITE_ANON_KEY"),
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            email,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
