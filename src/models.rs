use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
}

/// Columns written by an update. `paid_date` is always written, so `None` clears it.
#[derive(AsChangeset, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(treat_none_as_null = true)]
pub struct InvoiceChanges {
    pub amt: f64,
    pub paid: bool,
    pub paid_date: Option<DateTime<Utc>>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// An invoice joined with the company its `comp_code` points at, if any.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub company: Option<Company>,
}
