use mariecard_services::content::template::blank_document;
use serde_json::Value;

use super::test_app::{ADMIN_KEY, TestApp, TestUser};

impl TestApp {
    pub fn auth_get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_put(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_patch(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .patch(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn admin_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("x-admin-key", ADMIN_KEY)
    }

    /// Create an empty invitation for `user` and return its id.
    pub async fn create_invitation(&self, user: &TestUser) -> String {
        let resp = self
            .auth_post("/api/invitation", &user.access_token)
            .json(&serde_json::json!({ "title": "Test invitation" }))
            .send()
            .await
            .expect("Create invitation request failed");
        assert_eq!(resp.status().as_u16(), 200, "create invitation failed");

        let body: Value = resp.json().await.unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    /// Save `content` as the next draft and return the new version.
    pub async fn save_draft(&self, user: &TestUser, id: &str, content: &Value) -> i64 {
        let resp = self
            .auth_put(&format!("/api/invitation/{id}/content"), &user.access_token)
            .json(content)
            .send()
            .await
            .expect("Save draft request failed");
        assert_eq!(resp.status().as_u16(), 200, "save draft failed");

        let body: Value = resp.json().await.unwrap();
        body["version"].as_i64().unwrap()
    }

    /// Create an invitation with a seeded draft and publish it. Returns
    /// `(invitation_id, public_id)`.
    pub async fn seed_published(&self, user: &TestUser) -> (String, String) {
        let id = self.create_invitation(user).await;
        self.save_draft(user, &id, &blank_document().to_json().unwrap()).await;

        let resp = self
            .auth_post(&format!("/api/invitation/{id}/publish"), &user.access_token)
            .send()
            .await
            .expect("Publish request failed");
        assert_eq!(resp.status().as_u16(), 200, "publish failed");

        let body: Value = resp.json().await.unwrap();
        (id, body["public_id"].as_str().unwrap().to_string())
    }
}
