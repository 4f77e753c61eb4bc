use crate::app_state::AppState;
use crate::invoices::InvoiceError;
use crate::models::{Invoice, InvoiceDetail, InvoiceSummary};
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::error;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("Invoice with ID '{0}' not found")]
    NotFound(i32),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    UnexpectedError(#[from] eyre::Error),
}

impl From<InvoiceError> for RouteError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::NotFound(id) => RouteError::NotFound(id),
            InvoiceError::Store(report) => RouteError::UnexpectedError(report),
        }
    }
}

impl From<BlockingError> for RouteError {
    fn from(err: BlockingError) -> Self {
        RouteError::UnexpectedError(eyre::eyre!("{err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    status: u16,
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::NotFound(_) => StatusCode::NOT_FOUND,
            RouteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RouteError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self}");
        }
        HttpResponse::build(status).json(ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                status: status.as_u16(),
            },
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| RouteError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config).service(
        web::scope("/invoices")
            .route("", web::get().to(list_invoices))
            .route("", web::post().to(create_invoice))
            .route("/{id}", web::get().to(get_invoice))
            .route("/{id}", web::put().to(update_invoice))
            .route("/{id}", web::delete().to(delete_invoice)),
    );
}

#[derive(Serialize)]
struct InvoiceList {
    invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
struct InvoiceEnvelope<T> {
    invoice: T,
}

#[derive(Serialize)]
struct StatusMessage {
    status: &'static str,
}

pub async fn list_invoices(ctx: web::Data<AppState>) -> Result<impl Responder, RouteError> {
    let manager = ctx.invoice_manager.clone();
    let invoices = web::block(move || manager.list_invoices()).await??;
    Ok(web::Json(InvoiceList { invoices }))
}

pub async fn get_invoice(
    path: web::Path<i32>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let id = path.into_inner();
    let manager = ctx.invoice_manager.clone();
    let invoice: InvoiceDetail = web::block(move || manager.get_invoice(id)).await??;
    Ok(web::Json(InvoiceEnvelope { invoice }))
}

#[derive(Deserialize)]
pub struct CreateInvoice {
    comp_code: String,
    amt: f64,
}

pub async fn create_invoice(
    data: web::Json<CreateInvoice>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let CreateInvoice { comp_code, amt } = data.into_inner();
    let manager = ctx.invoice_manager.clone();
    let invoice: Invoice = web::block(move || manager.create_invoice(comp_code, amt)).await??;
    Ok(HttpResponse::Created().json(InvoiceEnvelope { invoice }))
}

#[derive(Deserialize)]
pub struct UpdateInvoice {
    amt: f64,
    paid: bool,
}

pub async fn update_invoice(
    path: web::Path<i32>,
    data: web::Json<UpdateInvoice>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let id = path.into_inner();
    let UpdateInvoice { amt, paid } = data.into_inner();
    let manager = ctx.invoice_manager.clone();
    let invoice = web::block(move || manager.update_invoice(id, amt, paid)).await??;
    Ok(web::Json(InvoiceEnvelope { invoice }))
}

pub async fn delete_invoice(
    path: web::Path<i32>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let id = path.into_inner();
    let manager = ctx.invoice_manager.clone();
    web::block(move || manager.delete_invoice(id)).await??;
    Ok(web::Json(StatusMessage { status: "deleted" }))
}
