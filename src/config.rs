use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::model::balance::AllowanceTable;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// MySQL when set, in-memory store otherwise
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub access_token_ttl: usize,
    pub api_prefix: String,
    pub cors_allowed_origins: Vec<String>,

    // Rate limiting
    pub rate_login_per_min: u32,

    pub allowances: AllowanceTable,
    pub seed_demo_users: bool,
    pub log_dir: String,
    pub environment: String,
}

/// Named settings with defaults, read through `lookup`.
struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn or(&self, key: &str, default: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| default.to_string())
    }

    fn parse<T>(&self, key: &str, default: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.or(key, default)
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid value"))
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let vars = Vars { lookup };

        let jwt_secret = (vars.lookup)("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let cors_allowed_origins = vars
            .or("CORS_ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            server_addr: vars.or("SERVER_ADDR", "127.0.0.1:5000"),
            database_url: (vars.lookup)("DATABASE_URL").filter(|u| !u.trim().is_empty()),
            jwt_secret,
            access_token_ttl: vars.parse("ACCESS_TOKEN_TTL", "3600")?, // default 1 hour
            api_prefix: vars.or("API_PREFIX", "/api"),
            cors_allowed_origins,

            rate_login_per_min: vars.parse("RATE_LOGIN_PER_MIN", "60")?,

            allowances: AllowanceTable {
                casual: vars.parse("ALLOWANCE_CASUAL", "12")?,
                sick: vars.parse("ALLOWANCE_SICK", "7")?,
                earned: vars.parse("ALLOWANCE_EARNED", "15")?,
            },
            seed_demo_users: vars.parse("SEED_DEMO_USERS", "true")?,
            log_dir: vars.or("LOG_DIR", "logs"),
            environment: vars.or("APP_ENV", "development"),
        })
    }

    /// Settings for tests and local experiments; no environment involved.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            server_addr: "127.0.0.1:0".to_string(),
            database_url: None,
            jwt_secret: "test-secret".to_string(),
            access_token_ttl: 900,
            api_prefix: "/api".to_string(),
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            rate_login_per_min: 1000,
            allowances: AllowanceTable::default(),
            seed_demo_users: false,
            log_dir: "logs".to_string(),
            environment: "test".to_string(),
        }
    }
}
