//! Service configuration

use std::net::SocketAddr;

use actix_web::cookie::Key;
use derivative::Derivative;
use serde::{Deserialize, Deserializer};
use sha3::{Digest, Sha3_512};
use tracing::warn;
use tracing_subscriber::filter::Directive;

use crate::context::auth::Credentials;

/// Logging output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Logging {
    /// Additional filtering directives
    #[serde(default, deserialize_with = "Logging::deserialize_filters")]
    pub filters: Vec<Directive>,

    /// Logging format
    #[serde(default)]
    pub format: LogFormat,
}

impl Logging {
    fn deserialize_filters<'de, D>(deserializer: D) -> Result<Vec<Directive>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dirs: Vec<String> = Deserialize::deserialize(deserializer)?;
        dirs.into_iter()
            .map(|dir| dir.parse().map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Session cookie configuration
#[derive(Derivative, Clone, Deserialize)]
#[derivative(Debug)]
pub struct Session {
    /// Secret the cookie key is derived from
    ///
    /// If not set, the random key is generated on every start, so sessions do not survive
    /// restarts.
    #[derivative(Debug = "ignore")]
    #[serde(default)]
    pub secret: Option<String>,

    /// Name of the session cookie
    #[serde(default = "Session::default_cookie_name")]
    pub cookie_name: String,

    /// Marks the session cookie as `Secure`
    #[serde(default)]
    pub secure: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: Self::default_cookie_name(),
            secure: false,
        }
    }
}

impl Session {
    fn default_cookie_name() -> String {
        "session".to_owned()
    }

    /// Builds the cookie signing and encryption key
    pub fn key(&self) -> Key {
        match &self.secret {
            Some(secret) => {
                let digest = Sha3_512::digest(secret.as_bytes());
                Key::from(digest.as_slice())
            }
            None => {
                warn!("No session secret configured, using ephemeral key");
                Key::generate()
            }
        }
    }
}

/// Top level service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address where to host the service
    #[serde(default = "Config::default_host")]
    pub host: SocketAddr,

    /// The only accepted login
    pub credentials: Credentials,

    /// Session cookie configuration
    #[serde(default)]
    pub session: Session,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    fn default_host() -> SocketAddr {
        ([127, 0, 0, 1], 3030).into()
    }
}
