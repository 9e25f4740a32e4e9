use crate::fixtures::test_app::TestApp;
use mariecard_services::content::template::blank_document;
use serde_json::{Value, json};

#[tokio::test]
async fn publish_without_draft_is_rejected() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let resp = app
        .auth_post(&format!("/api/invitation/{id}/publish"), &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "no_draft");
}

#[tokio::test]
async fn draft_saved_after_publish_does_not_change_public_view() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let (id, public_id) = app.seed_published(&user).await;
    assert_eq!(public_id.len(), 8);
    assert!(!public_id.starts_with('0'));

    let mut edited = blank_document().to_json().unwrap();
    edited["couple"]["groomName"] = json!("A different groom");
    app.save_draft(&user, &id, &edited).await;

    let resp = app
        .client
        .get(app.url(&format!("/api/public/{public_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["version"], 1);
    assert_eq!(
        body["content"]["couple"]["groomName"],
        blank_document().couple.groom_name.as_str()
    );

    // Publishing again exposes the edit under the same public id.
    let resp = app
        .auth_post(&format!("/api/invitation/{id}/publish"), &user.access_token)
        .send()
        .await
        .unwrap();
    let outcome: Value = resp.json().await.unwrap();
    assert_eq!(outcome["public_id"], public_id.as_str());
    assert_eq!(outcome["version"], 2);
    assert_eq!(
        outcome["url"],
        format!("https://cards.test/invitation/{public_id}")
    );

    let body: Value = app
        .client
        .get(app.url(&format!("/api/public/{public_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["content"]["couple"]["groomName"], "A different groom");
}

#[tokio::test]
async fn create_and_publish_in_one_call() {
    let app = TestApp::spawn().await;
    let user = app.user();

    let mut content = blank_document().to_json().unwrap();
    content["share"]["kakaoTitle"] = json!("Tom & Ann are getting married");

    let resp = app
        .auth_post("/api/invitation/publish", &user.access_token)
        .json(&content)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let outcome: Value = resp.json().await.unwrap();
    let id = outcome["invitation_id"].as_str().unwrap();
    let public_id = outcome["public_id"].as_str().unwrap();

    let invitation: Value = app
        .auth_get(&format!("/api/invitation/{id}"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(invitation["title"], "Tom & Ann are getting married");
    assert_eq!(invitation["status"], "published");
    assert_eq!(invitation["public_id"], public_id);
    assert!(invitation["published_at"].is_string());

    let draft: Value = app
        .auth_get(&format!("/api/invitation/{id}/content"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["version"], 1);
}

#[tokio::test]
async fn unknown_public_id_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/public/12345678"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn unpublished_invitation_has_no_public_view() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let meta: Value = app
        .auth_get(&format!("/api/invitation/{id}/meta"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(meta["status"], "draft");
    assert!(meta["public_id"].is_null());
    assert!(meta["published_at"].is_null());
}
