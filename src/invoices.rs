use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::clock::Clock;
use crate::invoice_repository::InvoiceRepository;
use crate::models::{Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice};

#[derive(thiserror::Error, Debug)]
pub enum InvoiceError {
    #[error("Invoice with ID '{0}' not found")]
    NotFound(i32),
    #[error(transparent)]
    Store(#[from] eyre::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn from_paid(paid: bool) -> Self {
        if paid {
            Self::Paid
        } else {
            Self::Unpaid
        }
    }
}

/// Computes the `paid_date` to store when an invoice moves from
/// `current_paid` to `requested_paid`. Only a change of status touches the
/// date: Unpaid -> Paid stamps `now`, Paid -> Unpaid clears it.
pub fn resolve_paid_date(
    current_paid: bool,
    current_paid_date: Option<DateTime<Utc>>,
    requested_paid: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (
        PaymentStatus::from_paid(current_paid),
        PaymentStatus::from_paid(requested_paid),
    ) {
        (PaymentStatus::Unpaid, PaymentStatus::Paid) => Some(now),
        (PaymentStatus::Paid, PaymentStatus::Unpaid) => None,
        _ => current_paid_date,
    }
}

#[derive(Clone)]
pub struct InvoiceManager {
    repository: Arc<dyn InvoiceRepository>,
    clock: Arc<dyn Clock>,
}

impl InvoiceManager {
    pub fn new(repository: Arc<dyn InvoiceRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
        Ok(self.repository.fetch_all()?)
    }

    pub fn get_invoice(&self, id: i32) -> Result<InvoiceDetail, InvoiceError> {
        let invoice = self.find(id)?;
        let company = self.repository.fetch_company_by_code(&invoice.comp_code)?;
        if company.is_none() {
            warn!("Invoice {id} references unknown company '{}'", invoice.comp_code);
        }
        Ok(InvoiceDetail { invoice, company })
    }

    pub fn create_invoice(&self, comp_code: String, amt: f64) -> Result<Invoice, InvoiceError> {
        let invoice = self.repository.insert(NewInvoice {
            comp_code,
            amt,
            paid: false,
            add_date: self.clock.now(),
        })?;
        info!("Created invoice {} for '{}'", invoice.id, invoice.comp_code);
        Ok(invoice)
    }

    /// Read-then-write without a transaction: concurrent updates of the same
    /// invoice race and the last write wins.
    pub fn update_invoice(&self, id: i32, amt: f64, paid: bool) -> Result<Invoice, InvoiceError> {
        let current = self.find(id)?;
        let paid_date = resolve_paid_date(current.paid, current.paid_date, paid, self.clock.now());

        let invoice = self
            .repository
            .update_by_id(id, InvoiceChanges { amt, paid, paid_date })?
            .ok_or(InvoiceError::NotFound(id))?;
        info!(
            "Updated invoice {id}: {:?} -> {:?}, paid_date {:?}",
            PaymentStatus::from_paid(current.paid),
            PaymentStatus::from_paid(invoice.paid),
            invoice.paid_date
        );
        Ok(invoice)
    }

    pub fn delete_invoice(&self, id: i32) -> Result<(), InvoiceError> {
        match self.repository.delete_by_id(id)? {
            Some(_) => {
                info!("Deleted invoice {id}");
                Ok(())
            }
            None => {
                warn!("Attempted to delete missing invoice {id}");
                Err(InvoiceError::NotFound(id))
            }
        }
    }

    fn find(&self, id: i32) -> Result<Invoice, InvoiceError> {
        self.repository.fetch_by_id(id)?.ok_or_else(|| {
            warn!("Invoice {id} not found");
            InvoiceError::NotFound(id)
        })
    }
}
