//! Login verification

use derivative::Derivative;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Deliberately does not tell which of the fields was wrong
    #[error("Sai tài khoản hoặc mật khẩu")]
    InvalidCredentials,
}

/// The single username and password pair allowed to log in
#[derive(Derivative, Clone, Deserialize)]
#[derivative(Debug)]
pub struct Credentials {
    /// Login name, stored in the session once authenticated
    pub username: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Verifies submitted login, returning the authenticated username
    ///
    /// Comparison is exact: case sensitive and without trimming.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&str, Error> {
        if username == self.username && password == self.password {
            Ok(&self.username)
        } else {
            Err(Error::InvalidCredentials)
        }
    }
}
