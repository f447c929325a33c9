mod test_support;

use actix_web::cookie::Cookie;
use actix_web::test;
use common::model::user::{Role, SessionInfo};
use common::requests::LoginRequest;
use serde_json::json;
use test_support::setup;

fn login_payload(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Pulls the session token out of the login response's Set-Cookie header.
fn session_cookie(resp: &actix_web::dev::ServiceResponse) -> String {
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("login must set a cookie")
        .to_str()
        .unwrap();
    let token = set_cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .expect("cookie must be the session token");
    token.to_string()
}

#[actix_web::test]
async fn login_then_me_roundtrip() {
    let env = setup();
    let app = test_app!(&env);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload("sensei", "correct-horse"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let token = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(Cookie::new("session", token))
        .to_request();
    let me: SessionInfo = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me.username, "sensei");
    assert_eq!(me.role, Role::Admin);
}

#[actix_web::test]
async fn bad_credentials_are_401() {
    let env = setup();
    let app = test_app!(&env);

    for (user, pass) in [("sensei", "wrong"), ("nobody", "correct-horse")] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_payload(user, pass))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}

#[actix_web::test]
async fn logout_invalidates_the_session() {
    let env = setup();
    let app = test_app!(&env);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload("seito", "battery-staple"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let token = session_cookie(&resp);

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(Cookie::new("session", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn user_creation_is_admin_only() {
    let env = setup();
    let app = test_app!(&env);
    let admin = test_support::session_token(&env, "sensei");
    let student = test_support::session_token(&env, "seito");

    let req = test::TestRequest::post()
        .uri("/api/auth/users")
        .cookie(Cookie::new("session", student))
        .set_json(json!({ "username": "shinnyuusei", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/auth/users")
        .cookie(Cookie::new("session", admin))
        .set_json(json!({ "username": "shinnyuusei", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The new account can log in and is a plain user.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload("shinnyuusei", "pw"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
