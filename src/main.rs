use orggate::configuration::get_configuration;
use orggate::startup::run;
use orggate::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("orggate".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));
    tracing::info!("Start server at {:?}", &address);

    run(listener, settings).await?.await
}
