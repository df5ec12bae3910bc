//! Server Configuration
//!
//! Everything is read from environment variables (a `.env` file is loaded
//! first by `main`).
//!
//! | Env Var                         | Default                  |
//! |---------------------------------|--------------------------|
//! | `DATABASE_URL`                  | required                 |
//! | `HOST`                          | `0.0.0.0`                |
//! | `PORT`                          | `8080`                   |
//! | `DATABASE_MAX_CONNECTIONS`      | `5`                      |
//! | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`                      |
//! | `SESSION_SECRET`                | random in debug builds   |
//! | `SESSION_TTL_SECS`              | `2592000` (30 days)      |
//! | `COOKIE_SECURE`                 | `false` debug, `true` release |
//! | `COOKIE_SAME_SITE`              | `lax` (`strict`, `lax`, `none`) |
//! | `STATIC_DIR`                    | `./static`               |
//! | `FRONTEND_ORIGINS`              | `http://localhost:8080`  |
//! | `PASSWORD_PEPPER`               | unset                    |

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::config::{AuthConfig, MIN_SESSION_SECRET_LEN, SameSite};

use crate::AppConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let session_secret = match get("SESSION_SECRET") {
            Some(encoded) => {
                let secret = platform::crypto::from_base64(encoded.trim())
                    .context("SESSION_SECRET must be standard base64")?;
                if secret.len() < MIN_SESSION_SECRET_LEN {
                    bail!("SESSION_SECRET must decode to at least {MIN_SESSION_SECRET_LEN} bytes");
                }
                secret
            }
            None if cfg!(debug_assertions) => {
                tracing::warn!(
                    "SESSION_SECRET not set, using a random one; sessions end on restart"
                );
                platform::crypto::random_bytes(MIN_SESSION_SECRET_LEN)
            }
            None => bail!("SESSION_SECRET must be set in release builds"),
        };

        let defaults = AuthConfig::default();
        let auth = AuthConfig {
            session_secret,
            session_ttl: Duration::from_secs(parse_or(
                get("SESSION_TTL_SECS"),
                "SESSION_TTL_SECS",
                defaults.session_ttl.as_secs(),
            )?),
            cookie_secure: parse_or(
                get("COOKIE_SECURE"),
                "COOKIE_SECURE",
                !cfg!(debug_assertions),
            )?,
            cookie_same_site: parse_or(
                get("COOKIE_SAME_SITE"),
                "COOKIE_SAME_SITE",
                defaults.cookie_same_site,
            )?,
            password_pepper: get("PASSWORD_PEPPER").map(String::into_bytes),
            ..defaults
        };

        if auth.cookie_same_site == SameSite::None && !auth.cookie_secure {
            bail!("COOKIE_SAME_SITE=none requires COOKIE_SECURE=true");
        }

        let cors_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get("PORT"), "PORT", 8080)?,
            database_url,
            database_max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                5,
            )?,
            database_acquire_timeout: Duration::from_secs(parse_or(
                get("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
            cors_origins,
            auth,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    /// The part of the configuration the router needs
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            auth: self.auth.clone(),
            static_dir: self.static_dir.clone(),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} is invalid: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    fn secret() -> String {
        platform::crypto::to_base64(&[9u8; 32])
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://x"), ("SESSION_SECRET", &secret())])
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.database_acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.cors_origins, vec!["http://localhost:8080"]);
        assert_eq!(config.auth.session_ttl, Duration::from_secs(2_592_000));
        assert_eq!(config.auth.session_secret, vec![9u8; 32]);
        assert!(config.auth.password_pepper.is_none());
        assert_eq!(config.auth.cookie_same_site, SameSite::Lax);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://x"),
            ("SESSION_SECRET", &secret()),
            ("PORT", "9000"),
            ("SESSION_TTL_SECS", "60"),
            ("COOKIE_SECURE", "true"),
            ("COOKIE_SAME_SITE", "Strict"),
            ("FRONTEND_ORIGINS", "http://a.test, http://b.test,"),
            ("PASSWORD_PEPPER", "pep"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.auth.session_ttl, Duration::from_secs(60));
        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.cookie_same_site, SameSite::Strict);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.auth.pepper(), Some(&b"pep"[..]));
    }

    #[test]
    fn test_same_site_none_needs_secure_cookie() {
        let base: [(&str, String); 2] = [("DATABASE_URL", "x".to_string()), ("SESSION_SECRET", secret())];
        let with = |extra: &[(&'static str, &'static str)]| {
            let mut vars: Vec<(&str, &str)> = base.iter().map(|(k, v)| (*k, v.as_str())).collect();
            vars.extend_from_slice(extra);
            load(&vars)
        };

        assert!(with(&[("COOKIE_SAME_SITE", "none"), ("COOKIE_SECURE", "false")]).is_err());
        let config = with(&[("COOKIE_SAME_SITE", "none"), ("COOKIE_SECURE", "true")]).unwrap();
        assert_eq!(config.auth.cookie_same_site, SameSite::None);
        assert!(with(&[("COOKIE_SAME_SITE", "sideways")]).is_err());
    }

    #[test]
    fn test_missing_database_url() {
        assert!(load(&[("SESSION_SECRET", &secret())]).is_err());
    }

    #[test]
    fn test_bad_values() {
        let short = platform::crypto::to_base64(&[1u8; 16]);
        assert!(load(&[("DATABASE_URL", "x"), ("SESSION_SECRET", &short)]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("SESSION_SECRET", "%%%")]).is_err());
        assert!(
            load(&[
                ("DATABASE_URL", "x"),
                ("SESSION_SECRET", &secret()),
                ("PORT", "http")
            ])
            .is_err()
        );
    }
}
