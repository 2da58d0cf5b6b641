use crate::configuration::Settings;
use actix_files::NamedFile;
use actix_web::{get, web, Result};
use std::path::PathBuf;

fn serve_page(static_dir: &str, file: &str) -> Result<NamedFile> {
    let path: PathBuf = [static_dir, file].iter().collect();
    Ok(NamedFile::open(path)?)
}

#[get("/home")]
pub async fn home(settings: web::Data<Settings>) -> Result<NamedFile> {
    serve_page(&settings.static_dir, "index.html")
}

#[get("/login")]
pub async fn login(settings: web::Data<Settings>) -> Result<NamedFile> {
    serve_page(&settings.static_dir, "login.html")
}

#[get("/signup")]
pub async fn signup(settings: web::Data<Settings>) -> Result<NamedFile> {
    serve_page(&settings.static_dir, "signup.html")
}
