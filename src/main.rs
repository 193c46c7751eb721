use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::{error, info};

mod cms;
mod config;
mod db;
mod models;
mod routes;
mod session;
mod users;

#[cfg(test)]
mod test_utils;

use cms::{MySqlPageStore, PageStore};
use config::Config;
use session::SessionManager;
use users::{MySqlUserStore, UserStore};

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("CMS backend is running.")
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Refuse to serve anything without a complete configuration.
    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let pool = db::connect(&config.database).await.map_err(|e| {
        error!("Failed to create pool: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e)
    })?;

    let sessions = web::Data::new(SessionManager::new(&config.session));
    let pages: Arc<dyn PageStore> = Arc::new(MySqlPageStore::new(pool.clone()));
    let users: Arc<dyn UserStore> = Arc::new(MySqlUserStore::new(pool));
    let pages = web::Data::from(pages);
    let users = web::Data::from(users);

    info!("Server running at http://{}", config.server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(sessions.clone())
            .app_data(pages.clone())
            .app_data(users.clone())
            .route("/", web::get().to(index))
            .configure(routes::routes::auth_configure)
            .configure(routes::routes::cms_configure)
    })
    .bind(&config.server_address)?
    .run()
    .await
}
