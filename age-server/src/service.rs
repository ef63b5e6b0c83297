//! Utilities for services building

use actix_web::http::header;
use actix_web::middleware;
use actix_web::web::{self, Data, Form, ServiceConfig};
use actix_web::{HttpResponse, Result, get, post};
use serde::Deserialize;
use tracing::debug;


mod session;
mod view;

use crate::config;
use crate::context::Context;
use session::UserSession;

/// Login form fields, missing ones are empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginForm {
    username: String,
    password: String,
}

/// Age form fields, missing ones are empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AgeForm {
    birth_year: String,
}

/// Redirect response to the `location`
fn redirect(location: &'static str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Login form
#[get("/")]
async fn login_page() -> HttpResponse {
    view::login(None)
}

/// Login attempt
///
/// Body which is not a valid form is treated as an empty form.
#[post("/")]
async fn login(
    context: Data<Context>,
    session: UserSession,
    form: Option<Form<LoginForm>>,
) -> Result<HttpResponse> {
    let form = form.map(Form::into_inner).unwrap_or_default();

    match context
        .credentials()
        .authenticate(&form.username, &form.password)
    {
        Ok(username) => {
            session.login(username)?;
            Ok(redirect("/age"))
        }
        Err(err) => Ok(view::login(Some(&err.to_string()))),
    }
}

/// Empty age form
#[get("")]
async fn age_page() -> HttpResponse {
    view::age("", None)
}

/// Age calculation
#[post("")]
async fn age(context: Data<Context>, form: Option<Form<AgeForm>>) -> HttpResponse {
    let form = form.map(Form::into_inner).unwrap_or_default();
    let outcome = birth_year::validate(&form.birth_year, context.current_year());
    debug!(?outcome, "Birth year validated");

    view::age(&form.birth_year, Some(&outcome))
}

/// Closes current session
#[get("/logout")]
async fn logout(session: UserSession) -> HttpResponse {
    session.logout();
    redirect("/")
}

/// Returns configuration function for the ActixWeb services
pub fn configure(
    session_config: config::Session,
    context: Context,
) -> impl Fn(&mut ServiceConfig) + Clone {
    // Generated once, so all workers accept the same cookies
    let key = session_config.key();

    move |cfg: &mut ServiceConfig| {
        let restricted = web::scope("/age")
            .wrap(middleware::from_fn(session::require_login))
            .service(age_page)
            .service(age);

        let session_aware = web::scope("")
            .wrap(session::middleware(&session_config, key.clone()))
            .service(login_page)
            .service(login)
            .service(logout)
            .service(restricted);

        cfg.app_data(Data::new(context.clone()))
            .service(session_aware);
    }
}
