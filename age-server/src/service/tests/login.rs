//! Login and logout tests

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;

use crate::service::tests::{
    age_request, assert_redirect, body_text, login_request, service_config, session_cookie,
};

#[actix_web::test]
async fn login_form() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_none());

    let text = body_text(resp).await;
    assert!(text.contains(r#"name="username""#));
    assert!(text.contains(r#"name="password""#));
    assert!(!text.contains("Sai tài khoản hoặc mật khẩu"));
}

#[actix_web::test]
async fn valid_login_redirects_to_age() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(&app, login_request("admin", "123456").to_request()).await;
    assert_redirect(&resp, "/age");
    let cookie = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/age").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(r#"name="birth_year""#));
}

#[actix_web::test]
async fn wrong_password_rejected() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(&app, login_request("admin", "wrongpass").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_none());
    assert!(
        body_text(resp)
            .await
            .contains("Sai tài khoản hoặc mật khẩu")
    );
}

#[actix_web::test]
async fn failed_login_grants_no_access() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    for (username, password) in [("ADMIN", "123456"), ("admin", "123456 "), ("", "")] {
        let resp = test::call_service(&app, login_request(username, password).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());
    }

    let resp = test::call_service(&app, age_request("1990").to_request()).await;
    assert_redirect(&resp, "/");
}

#[actix_web::test]
async fn missing_fields_treated_as_empty() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/")
            .set_form([("username", "admin")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        body_text(resp)
            .await
            .contains("Sai tài khoản hoặc mật khẩu")
    );

    let resp = test::call_service(&app, TestRequest::post().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        body_text(resp)
            .await
            .contains("Sai tài khoản hoặc mật khẩu")
    );
}

#[actix_web::test]
async fn logout_ends_session() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(&app, login_request("admin", "123456").to_request()).await;
    let cookie = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/logout").cookie(cookie).to_request(),
    )
    .await;
    assert_redirect(&resp, "/");
    let removal = session_cookie(&resp).unwrap();
    assert_eq!(removal.value(), "");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/age").cookie(removal).to_request(),
    )
    .await;
    assert_redirect(&resp, "/");
}

#[actix_web::test]
async fn logout_without_session() {
    let app = test::init_service(App::new().configure(service_config(2024))).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/logout").to_request()).await;
    assert_redirect(&resp, "/");
}

#[actix_web::test]
async fn sessions_survive_across_apps_with_shared_config() {
    // Every worker builds its own app from the same configuration
    let config = service_config(2024);
    let first = test::init_service(App::new().configure(config.clone())).await;
    let second = test::init_service(App::new().configure(config)).await;

    let resp = test::call_service(&first, login_request("admin", "123456").to_request()).await;
    let cookie = session_cookie(&resp).unwrap();

    let resp = test::call_service(
        &second,
        TestRequest::get().uri("/age").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
