use crate::configuration::Settings;
use crate::connectors::{IdentityConnector, IdentityServiceClient};
use crate::middleware::authentication;
use crate::middleware::authorization::{Guard, OrgAdmin, RequireRole};
use crate::routes;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let connector = IdentityServiceClient::new(settings.identity.clone())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let connector: web::Data<Arc<dyn IdentityConnector>> = web::Data::new(Arc::new(connector));

    let static_dir = settings.static_dir.clone();
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(settings.clone())
            .app_data(connector.clone())
            .service(routes::health_check)
            .service(routes::pages::home)
            .service(routes::pages::login)
            .service(routes::pages::signup)
            .service(routes::new_user::handler)
            .service(
                web::scope("/dashboard")
                    .wrap(Guard::new().policy(OrgAdmin))
                    .wrap(authentication::Manager::new())
                    .service(routes::dashboard::handler),
            )
            .service(
                web::scope("/secure")
                    .wrap(Guard::new().policy(OrgAdmin))
                    .wrap(authentication::Manager::new())
                    .service(routes::secure::handler),
            )
            .service(
                web::scope("/admin")
                    .wrap(Guard::new().policy(RequireRole::new(["admin"])))
                    .wrap(authentication::Manager::new())
                    .service(routes::admin::overview),
            )
            .service(Files::new("/", static_dir.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
