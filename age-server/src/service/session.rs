//! Session management

use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionExt, SessionMiddleware};
use actix_web::body::{EitherBody, MessageBody};
use actix_web::cookie::Key;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::error::ErrorInternalServerError;
use actix_web::middleware::Next;
use actix_web::{Error, FromRequest, HttpRequest};
use std::future::{Ready, ready};

use crate::config;
use crate::service::redirect;

/// Session key holding the authenticated username
const USER_KEY: &str = "user";

/// Builds the cookie session middleware
pub fn middleware(config: &config::Session, key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.cookie_name.clone())
        .cookie_path("/".into())
        .cookie_secure(config.secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .build()
}

/// Lets through only requests of logged in users, redirecting others to the login page
pub async fn require_login<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    if UserSession(req.get_session()).user()?.is_none() {
        let (req, _) = req.into_parts();
        let response = redirect("/").map_into_right_body();
        return Ok(ServiceResponse::new(req, response));
    }

    let response = next.call(req).await?;
    Ok(response.map_into_left_body())
}

/// Session of the user visiting the site
pub struct UserSession(Session);

impl UserSession {
    /// Marks the session as logged in by `username`
    pub fn login(&self, username: &str) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_KEY, username)
            .map_err(|err| ErrorInternalServerError(err.to_string()))
    }

    /// Returns logged in username, if any
    pub fn user(&self) -> Result<Option<String>, Error> {
        self.0
            .get(USER_KEY)
            .map_err(|err| ErrorInternalServerError(err.to_string()))
    }

    /// Forgets the session entirely
    pub fn logout(&self) {
        self.0.purge();
    }
}

impl FromRequest for UserSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(UserSession(req.get_session())))
    }
}
