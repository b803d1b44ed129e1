use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://hala-b-saudi.onrender.com/api/hbs";
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROTECTED_ACCOUNT: &str = "ashraf@westwalk.qa";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub asset_base_url: String,
    pub session_ttl: Duration,
    pub protected_accounts: Vec<String>,
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            session_ttl: Duration::from_secs(12 * 60 * 60),
            protected_accounts: vec![DEFAULT_PROTECTED_ACCOUNT.to_string()],
            request_timeout: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn init() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let api_base_url = env::var("HBS_API_BASE_URL").unwrap_or(defaults.api_base_url);
        let asset_base_url = env::var("VITE_API_BASE_URL").unwrap_or(defaults.asset_base_url);
        let session_ttl = parse_var::<u64>("HBS_SESSION_TTL_HOURS")
            .map(|hours| Duration::from_secs(hours * 60 * 60))
            .unwrap_or(defaults.session_ttl);
        let protected_accounts = env::var("HBS_PROTECTED_ACCOUNTS")
            .map(|raw| split_list(&raw))
            .unwrap_or(defaults.protected_accounts);
        let request_timeout = parse_var::<u64>("HBS_REQUEST_TIMEOUT_SECS").map(Duration::from_secs);
        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        Self {
            api_base_url,
            asset_base_url,
            session_ttl,
            protected_accounts,
            request_timeout,
            rust_log,
        }
    }

    pub fn is_protected_account(&self, email: &str) -> bool {
        let email = email.trim();
        self.protected_accounts
            .iter()
            .any(|protected| protected.eq_ignore_ascii_case(email))
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable configuration value");
            None
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
