use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Id the host assigned to this module, passed to install/uninstall.
    pub module_id: i64,
    pub lang: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("SWIFT_MAILER_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SWIFT_MAILER_HOST: {e}"))?;

        let port: u16 = env_or("SWIFT_MAILER_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SWIFT_MAILER_PORT: {e}"))?;

        let log_level = env_or("SWIFT_MAILER_LOG_LEVEL", "info");

        let module_id: i64 = env_or("SWIFT_MAILER_MODULE_ID", "0")
            .parse()
            .map_err(|e| format!("Invalid SWIFT_MAILER_MODULE_ID: {e}"))?;

        let lang = env_or("SWIFT_MAILER_LANG", "en_us");

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            module_id,
            lang,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
