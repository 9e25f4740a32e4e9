use crate::fixtures::test_app::TestApp;
use serde_json::{Value, json};

#[tokio::test]
async fn first_load_seeds_template_draft() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let resp = app
        .auth_get(&format!("/api/invitation/{id}/content"), &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["version"], 1);
    assert_eq!(body["content"]["heroSection"]["images"].as_array().unwrap().len(), 3);
    assert_eq!(body["content"]["gallerySection"]["images"].as_array().unwrap().len(), 12);

    // A second read returns the same version instead of seeding again.
    let again: Value = app
        .auth_get(&format!("/api/invitation/{id}/content"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["version"], 1);
}

#[tokio::test]
async fn save_normalizes_and_bumps_version() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let version = app
        .save_draft(
            &user,
            &id,
            &json!({
                "couple": { "groomName": "  Tom  " },
                "heroMedia": { "type": "gif" },
                "detailsSection": { "mapLinks": [{ "name": "Map", "url": "" }] },
            }),
        )
        .await;
    assert_eq!(version, 1);

    let body: Value = app
        .auth_get(&format!("/api/invitation/{id}/content"), &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["version"], 1);
    assert_eq!(body["content"]["couple"]["groomName"], "Tom");
    assert_eq!(body["content"]["heroMedia"]["type"], "image");
    assert!(body["content"]["detailsSection"]["mapLinks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_content_is_rejected_with_details() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let resp = app
        .auth_put(&format!("/api/invitation/{id}/content"), &user.access_token)
        .json(&json!({ "couple": { "groomName": "", "brideName": "" } }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["details"].as_array().unwrap().len(), 2);

    // Nothing was stored, so the next read seeds version 1.
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
async fn requests_without_identity_are_unauthorized() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/api/invitation")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .auth_get("/api/invitation", "not-a-jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn access_token_cookie_is_accepted() {
    let app = TestApp::spawn().await;
    let user = app.user();
    app.create_invitation(&user).await;

    let resp = app
        .client
        .get(app.url("/api/invitation"))
        .header("Cookie", format!("theme=dark; access_token={}", user.access_token))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let list: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Test invitation");
    assert_eq!(list[0]["status"], "draft");
}

#[tokio::test]
async fn other_users_invitations_are_forbidden() {
    let app = TestApp::spawn().await;
    let owner = app.user();
    let stranger = app.user();
    let id = app.create_invitation(&owner).await;

    for path in [
        format!("/api/invitation/{id}"),
        format!("/api/invitation/{id}/content"),
        format!("/api/invitation/{id}/meta"),
    ] {
        let resp = app.auth_get(&path, &stranger.access_token).send().await.unwrap();
        assert_eq!(resp.status().as_u16(), 403, "{path}");
    }

    // A stranger cannot tell a foreign id from one that does not exist.
    let foreign: Value = app
        .auth_get(&format!("/api/invitation/{id}/meta"), &stranger.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let missing: Value = app
        .auth_get(
            &format!("/api/invitation/{}/meta", bson::oid::ObjectId::new().to_hex()),
            &stranger.access_token,
        )
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(foreign, missing);

    let resp = app
        .auth_put(&format!("/api/invitation/{id}/content"), &stranger.access_token)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);

    let list: Vec<Value> = app
        .auth_get("/api/invitation", &stranger.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn malformed_and_unknown_ids() {
    let app = TestApp::spawn().await;
    let user = app.user();

    let resp = app
        .auth_get("/api/invitation/not-an-id/meta", &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let resp = app
        .auth_get(
            &format!("/api/invitation/{}/meta", bson::oid::ObjectId::new().to_hex()),
            &user.access_token,
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn only_drafts_can_be_deleted() {
    let app = TestApp::spawn().await;
    let user = app.user();

    let draft = app.create_invitation(&user).await;
    let resp = app
        .auth_delete(&format!("/api/invitation/{draft}"), &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let (published, _) = app.seed_published(&user).await;
    let resp = app
        .auth_delete(&format!("/api/invitation/{published}"), &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not_deletable");

    let list: Vec<Value> = app
        .auth_get("/api/invitation", &user.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], published);
}

#[tokio::test]
async fn malformed_body_gets_labelled_error() {
    let app = TestApp::spawn().await;
    let user = app.user();
    let id = app.create_invitation(&user).await;

    let resp = app
        .auth_put(&format!("/api/invitation/{id}/content"), &user.access_token)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    // Nothing was saved.
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
