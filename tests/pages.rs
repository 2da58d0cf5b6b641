mod common;

#[tokio::test]
async fn static_pages_are_served_unauthenticated() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    for page in ["/home", "/login", "/signup"] {
        let response = client
            .get(&format!("{}{}", &app.address, page))
            .send()
            .await
            .expect("Failed to execute request.");

        assert!(response.status().is_success(), "page {} not served", page);
        let body = response.text().await.expect("Failed to read body");
        assert!(body.contains("<html"), "page {} is not HTML", page);
    }
}

#[tokio::test]
async fn new_user_returns_welcome_message() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/new-user", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Welcome to the new user page"));
}
