mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn dashboard_returns_user_and_organization_projection() {
    let app = common::spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/v1/tokens/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sub": "user_1",
            "sid": "sess_1",
            "org_id": "org_1"
        })))
        .mount(&app.identity_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/user_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user_1",
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "public_metadata": { "role": "admin" }
        })))
        .mount(&app.identity_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations/org_1/memberships"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "organization": { "id": "org_1", "name": "Acme" },
                "public_user_data": { "user_id": "user_1" },
                "role": "admin"
            }],
            "total_count": 1
        })))
        .mount(&app.identity_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .get(&format!("{}/dashboard", &app.address))
        .bearer_auth("valid_token")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");

    assert_eq!(body["item"]["user"]["id"], "user_1");
    assert_eq!(body["item"]["user"]["email"], "ada@example.com");
    assert_eq!(body["item"]["user"]["name"], "Ada Lovelace");
    assert_eq!(body["item"]["organization"]["id"], "org_1");
    assert_eq!(body["item"]["organization"]["name"], "Acme");
    assert_eq!(body["item"]["organization"]["role"], "admin");
}
