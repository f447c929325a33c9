mod test_support;

use actix_web::cookie::Cookie;
use actix_web::test;
use common::model::lesson::Lesson;
use common::requests::CreateLessonRequest;
use test_support::{session_token, setup};

fn create_payload(title: &str, url: &str) -> CreateLessonRequest {
    CreateLessonRequest {
        semester: "term1".to_string(),
        subject: "math".to_string(),
        title: title.to_string(),
        url: url.to_string(),
    }
}

#[actix_web::test]
async fn create_list_reorder_delete_roundtrip() {
    let env = setup();
    let app = test_app!(&env);
    let token = session_token(&env, "sensei");

    // Two creates append at positions 0 and 1.
    let mut created = Vec::new();
    for (title, url) in [("第1回", "http://x"), ("第2回", "http://y")] {
        let req = test::TestRequest::post()
            .uri("/api/lessons")
            .cookie(Cookie::new("session", token.clone()))
            .set_json(create_payload(title, url))
            .to_request();
        let lesson: Lesson = test::call_and_read_body_json(&app, req).await;
        created.push(lesson);
    }
    assert_eq!(created[0].order, 0);
    assert_eq!(created[1].order, 1);

    let req = test::TestRequest::get()
        .uri("/api/lessons/term1/math")
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let listed: Vec<Lesson> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, created);

    // Swap the two via reorder; listing reflects the new order.
    let swapped = vec![created[1].clone(), created[0].clone()];
    let req = test::TestRequest::post()
        .uri("/api/lessons/reorder")
        .cookie(Cookie::new("session", token.clone()))
        .set_json(&swapped)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/lessons/term1/math")
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let listed: Vec<Lesson> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0].id, created[1].id);
    assert_eq!(listed[0].order, 0);
    assert_eq!(listed[1].id, created[0].id);
    assert_eq!(listed[1].order, 1);

    // Delete the first, reorder the survivor, and the partition renumbers.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/lessons/{}", listed[0].id))
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let survivor = vec![listed[1].clone()];
    let req = test::TestRequest::post()
        .uri("/api/lessons/reorder")
        .cookie(Cookie::new("session", token.clone()))
        .set_json(&survivor)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/lessons/term1/math")
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let listed: Vec<Lesson> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].order, 0);
}

#[actix_web::test]
async fn listing_requires_a_session() {
    let env = setup();
    let app = test_app!(&env);

    let req = test::TestRequest::get()
        .uri("/api/lessons/term1/math")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn mutations_are_admin_only() {
    let env = setup();
    let app = test_app!(&env);
    let token = session_token(&env, "seito");

    let req = test::TestRequest::post()
        .uri("/api/lessons")
        .cookie(Cookie::new("session", token.clone()))
        .set_json(create_payload("第1回", "http://x"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::delete()
        .uri("/api/lessons/some-id")
        .cookie(Cookie::new("session", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn create_rejects_blank_fields() {
    let env = setup();
    let app = test_app!(&env);
    let token = session_token(&env, "sensei");

    let req = test::TestRequest::post()
        .uri("/api/lessons")
        .cookie(Cookie::new("session", token.clone()))
        .set_json(create_payload("  ", "http://x"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn deleting_unknown_lesson_is_404() {
    let env = setup();
    let app = test_app!(&env);
    let token = session_token(&env, "sensei");

    let req = test::TestRequest::delete()
        .uri("/api/lessons/missing")
        .cookie(Cookie::new("session", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
