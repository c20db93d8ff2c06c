//! Configuration management for the quote service.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. The provider API key is the one setting allowed to be absent: the
//! service still starts and answers every send with `ServiceUnconfigured`.

use crate::domain::EmailAddress;
use crate::engine::TotalPolicy;
use crate::error::{ConfigError, ConfigResult};
use serde::Serialize;
use std::env;

/// Business identity used for addressing and in every template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailSettings {
    /// Sender, e.g. `GTA Photo Booths<hello@gtaphotobooths.ca>`
    pub from: String,

    /// Business inbox that receives form submissions
    pub inbox: String,

    /// Business name shown in templates and subjects
    pub name: String,

    /// Public phone number, offered as a fallback contact channel
    pub phone: String,

    /// E.164 dial string for the public number, used in `tel:` links
    pub phone_dial: String,

    /// Website base URL, without trailing slash
    pub site_url: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        MailSettings {
            from: "GTA Photo Booths<hello@gtaphotobooths.ca>".to_string(),
            inbox: "hello@gtaphotobooths.ca".to_string(),
            name: "GTA Photo Booths".to_string(),
            phone: "647-378-5332".to_string(),
            phone_dial: "+16473785332".to_string(),
            site_url: "https://www.gtaphotobooths.ca".to_string(),
        }
    }
}

/// Configuration for the quote service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider API key; `None` when unset or blank
    pub resend_api_key: Option<String>,

    /// Email provider base URL
    pub resend_api_url: String,

    pub mail: MailSettings,

    /// Socket address the HTTP server binds to
    pub bind_addr: String,

    /// Provider HTTP timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Handling of a client total that disagrees with the recomputed one
    pub total_policy: TotalPolicy,

    /// Deployment environment; anything but "production" exposes error detail
    pub app_env: String,

    /// Default log filter (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: provider credential (unset disables sending)
    /// - `RESEND_API_URL`: provider base URL (default: https://api.resend.com)
    /// - `MAIL_FROM`, `BUSINESS_INBOX`, `BUSINESS_NAME`, `BUSINESS_PHONE`, `SITE_URL`
    /// - `BUSINESS_PHONE_DIAL`: E.164 form of `BUSINESS_PHONE` (default: +16473785332)
    /// - `BIND_ADDR`: server address (default: 0.0.0.0:3000)
    /// - `REQUEST_TIMEOUT`: provider timeout in seconds (default: 10)
    /// - `QUOTE_TOTAL_POLICY`: `flag` or `reject` (default: flag)
    /// - `APP_ENV`: deployment environment (default: production)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let resend_api_url = env::var("RESEND_API_URL").unwrap_or(defaults.resend_api_url);
        Self::require_http_url("RESEND_API_URL", &resend_api_url)?;

        let site_url = env::var("SITE_URL").unwrap_or(defaults.mail.site_url);
        Self::require_http_url("SITE_URL", &site_url)?;

        let inbox = env::var("BUSINESS_INBOX").unwrap_or(defaults.mail.inbox);
        if !EmailAddress::is_valid(&inbox) {
            return Err(ConfigError::InvalidValue {
                var: "BUSINESS_INBOX".to_string(),
                reason: format!("Not an email address: {}", inbox),
            });
        }

        let phone_dial = env::var("BUSINESS_PHONE_DIAL").unwrap_or(defaults.mail.phone_dial);
        if !Self::is_e164(&phone_dial) {
            return Err(ConfigError::InvalidValue {
                var: "BUSINESS_PHONE_DIAL".to_string(),
                reason: format!("Must be '+' followed by 8 to 15 digits, got: {}", phone_dial),
            });
        }

        let mail = MailSettings {
            from: env::var("MAIL_FROM").unwrap_or(defaults.mail.from),
            inbox,
            name: env::var("BUSINESS_NAME").unwrap_or(defaults.mail.name),
            phone: env::var("BUSINESS_PHONE").unwrap_or(defaults.mail.phone),
            phone_dial,
            site_url: site_url.trim_end_matches('/').to_string(),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let total_policy = match env::var("QUOTE_TOTAL_POLICY") {
            Ok(val) => val
                .parse::<TotalPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "QUOTE_TOTAL_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.total_policy,
        };

        Ok(Config {
            resend_api_key,
            resend_api_url,
            mail,
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            request_timeout,
            total_policy,
            app_env: env::var("APP_ENV").unwrap_or(defaults.app_env),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Whether error responses may carry debug detail.
    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    fn is_e164(value: &str) -> bool {
        value
            .strip_prefix('+')
            .is_some_and(|digits| {
                (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
            })
    }

    fn require_http_url(var: &str, value: &str) -> ConfigResult<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_key: None,
            resend_api_url: "https://api.resend.com".to_string(),
            mail: MailSettings::default(),
            bind_addr: "0.0.0.0:3000".to_string(),
            request_timeout: 10,
            total_policy: TotalPolicy::Flag,
            app_env: "production".to_string(),
            log_level: "info".to_string(),
        }
    }
}
