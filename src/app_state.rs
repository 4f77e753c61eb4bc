use crate::invoices::InvoiceManager;

#[derive(Clone)]
pub struct AppState {
    pub invoice_manager: InvoiceManager,
}
