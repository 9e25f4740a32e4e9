use crate::fixtures::test_app::TestApp;
use chrono::Duration;
use serde_json::{Value, json};

async fn issue(app: &TestApp, id: &str, token: &str) -> Value {
    let resp = app
        .auth_post(&format!("/api/invitation/{id}/preview"), token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn preview_expires_after_thirty_minutes() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let grant = issue(&app, &id, &user.access_token).await;
    let token = grant["token"].as_str().unwrap();
    assert_eq!(
        grant["preview_url"],
        format!("http://app.test/preview/{token}")
    );

    let ok: Value = app
        .auth_get(&format!("/api/preview/{token}"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(ok["reason"].is_null());
    assert!(ok["content"]["couple"].is_object());

    app.advance(Duration::minutes(30));

    let resp = app
        .auth_get(&format!("/api/preview/{token}"), &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let expired: Value = resp.json().await.unwrap();
    assert_eq!(expired["reason"], "expired");
    assert!(expired["content"].is_null());
}

#[tokio::test]
async fn preview_shows_latest_draft_not_published() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let (id, _) = app.seed_published(&user).await;

    app.save_draft(&user, &id, &json!({ "couple": { "groomName": "Draft only" } }))
        .await;

    let grant = issue(&app, &id, &user.access_token).await;
    let body: Value = app
        .auth_get(
            &format!("/api/preview/{}", grant["token"].as_str().unwrap()),
            &user.access_token,
        )
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["content"]["couple"]["groomName"], "Draft only");
}

#[tokio::test]
async fn preview_denials() {
    let app = TestApp::spawn().await;
    let owner = app.user();
    let stranger = app.user();
    let id = app.create_invitation(&owner).await;
    let grant = issue(&app, &id, &owner.access_token).await;
    let token = grant["token"].as_str().unwrap();

    let anonymous: Value = app
        .client
        .get(app.url(&format!("/api/preview/{token}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(anonymous["reason"], "unauthorized");

    let foreign: Value = app
        .auth_get(&format!("/api/preview/{token}"), &stranger.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(foreign["reason"], "forbidden");
    assert!(foreign["content"].is_null());

    let unknown: Value = app
        .auth_get("/api/preview/does-not-exist", &owner.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unknown["reason"], "not_found");

    let resp = app
        .auth_post(&format!("/api/invitation/{id}/preview"), &stranger.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}
