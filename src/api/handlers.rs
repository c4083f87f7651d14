//! HTTP request handlers for the invoice payment gateway.
//!
//! This module contains the handler functions for all inbound routes.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{InvoiceStatus, PaymentPrompt, WorkflowOutcome};

use super::request::ChargeForm;
use super::response::ErrorPage;
use super::state::AppState;
use super::views;

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/unpaid", get(list_unpaid_handler))
        .route("/paid", get(list_paid_handler))
        .route("/pay/:invoiceid", get(pay_handler))
        .route("/charge", post(charge_handler))
        .with_state(state)
}

/// Handler for GET /unpaid.
async fn list_unpaid_handler(State(state): State<AppState>) -> Response {
    render_listing(state, InvoiceStatus::Unpaid, "Unpaid Invoices").await
}

/// Handler for GET /paid.
async fn list_paid_handler(State(state): State<AppState>) -> Response {
    render_listing(state, InvoiceStatus::Paid, "Paid Invoices").await
}

async fn render_listing(state: AppState, status: InvoiceStatus, title: &str) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        status = status.as_path_segment(),
        "Listing invoices"
    );

    match state.accounting().list_invoices(status).await {
        Ok(invoices) => Html(views::invoice_list(title, &invoices)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invoice listing failed"
            );
            ErrorPage::from(err).into_response()
        }
    }
}

/// Handler for GET /pay/:invoiceid.
///
/// Fetches the invoice and branches: a settled invoice renders the
/// paid-in-full page; an outstanding balance renders the payment form
/// with the hosted widget.
async fn pay_handler(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        invoice_id = %invoice_id,
        "Preparing payment"
    );

    match state.workflow().prepare(&invoice_id).await {
        Ok(PaymentPrompt::AlreadyPaid { invoice }) => {
            Html(views::paid_in_full(&invoice)).into_response()
        }
        Ok(PaymentPrompt::AwaitingCharge {
            invoice,
            balance_due,
        }) => Html(views::payment_form(&invoice, balance_due, state.settings())).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                invoice_id = %invoice_id,
                error = %err,
                "Payment preparation failed"
            );
            ErrorPage::from(err).into_response()
        }
    }
}

/// Handler for POST /charge.
///
/// Runs the charge submission to a terminal outcome and renders it. Every
/// submission gets a response; no failure path is swallowed.
async fn charge_handler(
    State(state): State<AppState>,
    payload: Result<Form<ChargeForm>, FormRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Malformed charge form"
            );
            return ErrorPage::bad_request(rejection.body_text()).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        invoice_id = %form.invoiceid,
        amount = %form.invoiceamount,
        "Processing charge submission"
    );

    let invoice_id = form.invoiceid.clone();
    match state.workflow().submit(form.into()).await {
        Ok(WorkflowOutcome::Paid {
            invoice_number,
            amount,
            ..
        }) => Html(views::charge_success(&invoice_number, &amount)).into_response(),
        Ok(WorkflowOutcome::ChargeFailed { reason }) => {
            Html(views::payment_issue(&invoice_id, &reason)).into_response()
        }
        Ok(WorkflowOutcome::RecordingFailed { charge_id, .. }) => {
            Html(views::recording_failed(&charge_id)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                invoice_id = %invoice_id,
                error = %err,
                "Charge submission rejected"
            );
            ErrorPage::from(err).into_response()
        }
    }
}
