use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use crate::app_state::AppState;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::invoice_repository::PgInvoiceRepository;
use crate::invoices::InvoiceManager;

mod app_state;
mod clock;
mod config;
mod controller;
mod invoice_repository;
mod invoices;
mod logger;
mod models;
mod schema;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logger::setup_logger(config.log_level, config.log_path.as_deref())?;

    let repository = PgInvoiceRepository::connect(&config.database_url, config.pool_size)?;
    let invoice_manager = InvoiceManager::new(Arc::new(repository), Arc::new(SystemClock));

    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                invoice_manager: invoice_manager.clone(),
            }))
            .wrap(middleware::Logger::default())
            .configure(controller::configure)
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?
    ;

    Ok(())
}
