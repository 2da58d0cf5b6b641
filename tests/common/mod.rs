use orggate::configuration::Settings;
use orggate::connectors::IdentityServiceConfig;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub identity_server: MockServer,
}

pub async fn spawn_app() -> TestApp {
    let identity_server = MockServer::start().await;

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        static_dir: "static".to_string(),
        identity: IdentityServiceConfig {
            base_url: identity_server.uri(),
            timeout_secs: 5,
            secret_key: "sk_test_secret".to_string(),
            publishable_key: "pk_test_publishable".to_string(),
        },
    };

    let server = orggate::startup::run(listener, settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        identity_server,
    }
}
