use crate::models::{Company, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::Result;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Storage boundary for invoices. Lookups by key return `None` when no row
/// matches; turning that into a not-found error is the caller's job.
pub trait InvoiceRepository: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<InvoiceSummary>>;

    fn fetch_by_id(&self, invoice_id: i32) -> Result<Option<Invoice>>;

    fn fetch_company_by_code(&self, company_code: &str) -> Result<Option<Company>>;

    fn insert(&self, new_invoice: NewInvoice) -> Result<Invoice>;

    fn update_by_id(&self, invoice_id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>>;

    /// Returns the id of the removed row.
    fn delete_by_id(&self, invoice_id: i32) -> Result<Option<i32>>;
}

pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    pub fn connect(database_url: &str, pool_size: u32) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;
        Ok(Self { pool })
    }
}

impl InvoiceRepository for PgInvoiceRepository {
    fn fetch_all(&self) -> Result<Vec<InvoiceSummary>> {
        use crate::schema::invoices::dsl::*;

        let mut connection = self.pool.get()?;
        Ok(invoices
            .select(InvoiceSummary::as_select())
            .order(id.asc())
            .load(&mut connection)?)
    }

    fn fetch_by_id(&self, invoice_id: i32) -> Result<Option<Invoice>> {
        use crate::schema::invoices::dsl::*;

        let mut connection = self.pool.get()?;
        Ok(invoices
            .find(invoice_id)
            .select(Invoice::as_select())
            .first(&mut connection)
            .optional()?)
    }

    fn fetch_company_by_code(&self, company_code: &str) -> Result<Option<Company>> {
        use crate::schema::companies::dsl::*;

        let mut connection = self.pool.get()?;
        Ok(companies
            .find(company_code)
            .select(Company::as_select())
            .first(&mut connection)
            .optional()?)
    }

    fn insert(&self, new_invoice: NewInvoice) -> Result<Invoice> {
        use crate::schema::invoices;

        let mut connection = self.pool.get()?;
        Ok(diesel::insert_into(invoices::table)
            .values(&new_invoice)
            .returning(Invoice::as_returning())
            .get_result(&mut connection)?)
    }

    fn update_by_id(&self, invoice_id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        use crate::schema::invoices::dsl::*;

        let mut connection = self.pool.get()?;
        Ok(diesel::update(invoices.find(invoice_id))
            .set(&changes)
            .returning(Invoice::as_returning())
            .get_result(&mut connection)
            .optional()?)
    }

    fn delete_by_id(&self, invoice_id: i32) -> Result<Option<i32>> {
        use crate::schema::invoices::dsl::*;

        let mut connection = self.pool.get()?;
        Ok(diesel::delete(invoices.find(invoice_id))
            .returning(id)
            .get_result(&mut connection)
            .optional()?)
    }
}
