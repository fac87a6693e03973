use std::path::PathBuf;

use crate::auth::cookie::CookieConfig;
use crate::auth::jwt::JwtConfig;

/// Deployment environment. Controls cookie attributes and whether error
/// responses carry internal detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Parse `APP_ENV`; anything other than `production` is development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }

    pub fn is_development(self) -> bool {
        self == AppEnv::Development
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://divesite.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub environment: AppEnv,
    /// JWT signing configuration.
    pub jwt: JwtConfig,
    /// Session cookie configuration.
    pub cookie: CookieConfig,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    /// Whether list `search` matches case-sensitively (default: `true`).
    pub search_case_sensitive: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                        |
    /// |-------------------------|------------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                      |
    /// | `PORT`                  | `8080`                                         |
    /// | `DATABASE_URL`          | `sqlite://divesite.db`                         |
    /// | `CORS_ORIGINS`          | `http://localhost:5173,http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                           |
    /// | `APP_ENV`               | `development`                                  |
    /// | `UPLOAD_DIR`            | `uploads`                                      |
    /// | `SEARCH_CASE_SENSITIVE` | `true`                                         |
    ///
    /// JWT and cookie variables are documented on [`JwtConfig::from_env`] and
    /// [`CookieConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://divesite.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let environment = AppEnv::parse(
            &std::env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
        );

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let search_case_sensitive: bool = std::env::var("SEARCH_CASE_SENSITIVE")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEARCH_CASE_SENSITIVE must be true or false");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            environment,
            jwt: JwtConfig::from_env(),
            cookie: CookieConfig::from_env(),
            upload_dir,
            search_case_sensitive,
        }
    }
}
