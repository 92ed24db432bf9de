use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: String,
    pub notion_database_id: String,
    pub notion_api_base: String,
    pub allowed_domains: Vec<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let notion_token = env_required("NOTION_TOKEN")?;
        let notion_database_id = env_required("NOTION_DATABASE_ID")?;

        let notion_api_base = env_or("FORMGATE_NOTION_API_BASE", "https://api.notion.com")
            .trim_end_matches('/')
            .to_string();

        let allowed_domains: Vec<String> = env_or("ALLOWED_DOMAINS", "localhost")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let host: IpAddr = env_or("FORMGATE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMGATE_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let max_body_size: usize = env_or("FORMGATE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMGATE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMGATE_LOG_LEVEL", "info");

        Ok(Config {
            notion_token,
            notion_database_id,
            notion_api_base,
            allowed_domains,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
