//! The HTTP-only session cookie that carries the access token.
//!
//! Production cookies are `Secure; SameSite=None` so the admin console can
//! live on a different origin; development cookies are `SameSite=Lax` and
//! work over plain HTTP.

use axum_extra::extract::cookie::{Cookie, SameSite};
use cookie::time::Duration as CookieDuration;

use crate::config::AppEnv;

/// Default cookie name.
const DEFAULT_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    /// When `false`, login only returns the token in the body.
    pub enabled: bool,
    /// `Domain` attribute for production cookies.
    pub domain: Option<String>,
}

impl CookieConfig {
    /// Load cookie settings from the environment.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `AUTH_COOKIE_NAME`    | `token` |
    /// | `AUTH_COOKIE_ENABLED` | `true`  |
    /// | `COOKIE_DOMAIN`       | unset   |
    pub fn from_env() -> Self {
        let name = std::env::var("AUTH_COOKIE_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.into());

        let enabled: bool = std::env::var("AUTH_COOKIE_ENABLED")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("AUTH_COOKIE_ENABLED must be true or false");

        let domain = std::env::var("COOKIE_DOMAIN")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            name,
            enabled,
            domain,
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.into(),
            enabled: true,
            domain: None,
        }
    }
}

/// Cookie holding `token`, valid for `max_age_secs`.
pub fn session_cookie(
    config: &CookieConfig,
    env: AppEnv,
    token: String,
    max_age_secs: i64,
) -> Cookie<'static> {
    let mut cookie = base_cookie(config, env, token);
    cookie.set_max_age(CookieDuration::seconds(max_age_secs));
    cookie
}

/// Expired, empty cookie that clears the session cookie when added to a
/// response. Path and domain match the issued cookie.
pub fn removal_cookie(config: &CookieConfig, env: AppEnv) -> Cookie<'static> {
    let mut cookie = base_cookie(config, env, String::new());
    cookie.make_removal();
    cookie
}

fn base_cookie(config: &CookieConfig, env: AppEnv, value: String) -> Cookie<'static> {
    let builder = Cookie::build((config.name.clone(), value))
        .path("/")
        .http_only(true);

    match env {
        AppEnv::Production => {
            let builder = builder.secure(true).same_site(SameSite::None);
            match &config.domain {
                Some(domain) => builder.domain(domain.clone()).build(),
                None => builder.build(),
            }
        }
        AppEnv::Development => builder.secure(false).same_site(SameSite::Lax).build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_domain() -> CookieConfig {
        CookieConfig {
            domain: Some("example-dive.com".into()),
            ..CookieConfig::default()
        }
    }

    #[test]
    fn production_cookie_is_cross_site() {
        let cookie = session_cookie(&config_with_domain(), AppEnv::Production, "abc".into(), 3600);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.domain(), Some("example-dive.com"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(3600)));
    }

    #[test]
    fn development_cookie_is_lax_without_domain() {
        let cookie = session_cookie(&config_with_domain(), AppEnv::Development, "abc".into(), 60);
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.domain(), None);
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn removal_cookie_matches_name_and_path() {
        let cookie = removal_cookie(&CookieConfig::default(), AppEnv::Development);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}
