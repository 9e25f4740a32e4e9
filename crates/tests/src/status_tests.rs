use crate::fixtures::test_app::TestApp;
use chrono::Duration;
use serde_json::{Value, json};

#[tokio::test]
async fn expire_hides_and_restore_republishes() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let (id, public_id) = app.seed_published(&user).await;
    let status_path = format!("/api/invitation/{id}/status");

    let resp = app
        .auth_patch(&status_path, &user.access_token)
        .json(&json!({ "action": "expire" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let meta: Value = resp.json().await.unwrap();
    assert_eq!(meta["status"], "archived");
    assert!(meta["published_at"].is_null());

    let resp = app
        .client
        .get(app.url(&format!("/api/public/{public_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    app.advance(Duration::hours(1));
    let meta: Value = app
        .auth_patch(&status_path, &user.access_token)
        .json(&json!({ "action": "restore" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(meta["status"], "published");
    assert_eq!(meta["public_id"], public_id.as_str());
    assert!(meta["published_at"].is_string());

    let resp = app
        .client
        .get(app.url(&format!("/api/public/{public_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn illegal_transitions_are_rejected() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let draft = app.create_invitation(&user).await;

    for action in ["expire", "restore"] {
        let resp = app
            .auth_patch(&format!("/api/invitation/{draft}/status"), &user.access_token)
            .json(&json!({ "action": action }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 409, "{action} from draft");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "invalid_transition");
    }

    let (published, _) = app.seed_published(&user).await;
    let resp = app
        .auth_patch(&format!("/api/invitation/{published}/status"), &user.access_token)
        .json(&json!({ "action": "restore" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 409);
}

#[tokio::test]
async fn unknown_action_is_bad_request() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let (id, _) = app.seed_published(&user).await;

    let resp = app
        .auth_patch(&format!("/api/invitation/{id}/status"), &user.access_token)
        .json(&json!({ "action": "delete" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let resp = app
        .auth_patch(&format!("/api/invitation/{id}/status"), &user.access_token)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}
