use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, TimeZone, Utc};

use crate::app_state::AppState;
use crate::clock::Clock;
use crate::invoice_repository::InvoiceRepository;
use crate::invoices::InvoiceManager;


pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

pub fn app_state(
    repository: Arc<dyn InvoiceRepository>,
    clock: Arc<dyn Clock>,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        invoice_manager: InvoiceManager::new(repository, clock),
    })
}
