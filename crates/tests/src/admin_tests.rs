use crate::fixtures::test_app::TestApp;
use reqwest::Method;
use serde_json::{Value, json};

#[tokio::test]
async fn admin_key_is_required_when_configured() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/admin/invitation"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .client
        .get(app.url("/api/admin/invitation"))
        .header("x-admin-key", "wrong")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .admin_request(Method::GET, "/api/admin/invitation")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn blank_admin_key_leaves_gate_open() {
    let app = TestApp::spawn_with_settings(|s| s.admin.access_key = Some("  ".to_string())).await;

    let resp = app
        .client
        .get(app.url("/api/admin/invitation"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn admin_sees_and_edits_every_invitation() {
    let app = TestApp::spawn().await;
    let alice = app.user();
    let bob = app.user();
    let id = app.create_invitation(&alice).await;
    app.create_invitation(&bob).await;

    let list: Vec<Value> = app
        .admin_request(Method::GET, "/api/admin/invitation")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 2);

    let draft: Value = app
        .admin_request(Method::GET, &format!("/api/admin/invitation/{id}/content"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(draft["version"], 1);

    let mut content = draft["content"].clone();
    content["couple"]["groomName"] = json!("Edited by admin");
    let saved: Value = app
        .admin_request(Method::PUT, &format!("/api/admin/invitation/{id}/content"))
        .json(&content)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["version"], 2);

    let outcome: Value = app
        .admin_request(Method::POST, &format!("/api/admin/invitation/{id}/publish"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let public_id = outcome["public_id"].as_str().unwrap();

    // The owner sees the admin's publish.
    let meta: Value = app
        .auth_get(&format!("/api/invitation/{id}/meta"), &alice.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(meta["status"], "published");
    assert_eq!(meta["public_id"], public_id);

    let expired: Value = app
        .admin_request(Method::PATCH, &format!("/api/admin/invitation/{id}/status"))
        .json(&json!({ "action": "expire" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(expired["status"], "archived");
}

#[tokio::test]
async fn admin_preview_belongs_to_owner() {
    let app = TestApp::spawn().await;
    let owner = app.user();
    let id = app.create_invitation(&owner).await;

    let grant: Value = app
        .admin_request(Method::POST, &format!("/api/admin/invitation/{id}/preview"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let token = grant["token"].as_str().unwrap();

    let body: Value = app
        .auth_get(&format!("/api/preview/{token}"), &owner.access_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["reason"].is_null());
    assert!(body["content"].is_object());
}

#[tokio::test]
async fn admin_unknown_invitation_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .admin_request(
            Method::GET,
            &format!("/api/admin/invitation/{}/meta", bson::oid::ObjectId::new().to_hex()),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
