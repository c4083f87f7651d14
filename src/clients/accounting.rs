//! Client for the accounting platform's invoice and payment APIs.
//!
//! All three operations go over HTTPS with HTTP basic authentication and
//! an `api_key` query parameter, matching the platform's API contract:
//!
//! - `GET {base}/invoices/{status}.json` — invoice listings
//! - `GET {base}/invoices/{id}.json` — single invoice detail
//! - `POST {base}/payments.json` — payment creation (query-string write)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AccountingSettings;
use crate::error::{BillingError, BillingResult};
use crate::models::{Invoice, InvoiceStatus, PaymentConfirmation, PaymentRecord};

/// Read/write operations against the accounting platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountingApi: Send + Sync {
    /// Lists invoices with the given status.
    async fn list_invoices(&self, status: InvoiceStatus) -> BillingResult<Vec<Invoice>>;

    /// Fetches one invoice's detail.
    ///
    /// A platform 404 maps to [`BillingError::NotFound`] rather than
    /// surfacing as a generic parse failure.
    async fn get_invoice(&self, invoice_id: &str) -> BillingResult<Invoice>;

    /// Records a payment against an invoice.
    ///
    /// Success is signaled only by HTTP 201; any other status becomes
    /// [`BillingError::PlatformWrite`] with the raw body preserved for
    /// diagnostic display.
    async fn record_payment(&self, record: &PaymentRecord) -> BillingResult<PaymentConfirmation>;
}

/// `reqwest`-backed [`AccountingApi`] implementation.
pub struct HttpAccountingClient {
    http: reqwest::Client,
    settings: AccountingSettings,
}

impl HttpAccountingClient {
    /// Builds a client with the given platform settings and a bounded
    /// per-request timeout.
    pub fn new(settings: AccountingSettings, timeout: Duration) -> BillingResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(Self { http, settings })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BillingResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .basic_auth(&self.settings.user, Some(&self.settings.password))
            .header(header::ACCEPT, "application/json")
            .query(&[("api_key", self.settings.api_key.as_str())])
            .send()
            .await
            .map_err(transport)?;

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| BillingError::Parse {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl AccountingApi for HttpAccountingClient {
    async fn list_invoices(&self, status: InvoiceStatus) -> BillingResult<Vec<Invoice>> {
        let path = format!("invoices/{}.json", status.as_path_segment());
        debug!(path = %path, "Listing invoices");
        self.get_json(&path).await
    }

    async fn get_invoice(&self, invoice_id: &str) -> BillingResult<Invoice> {
        let path = format!("invoices/{}.json", invoice_id);
        debug!(invoice_id = %invoice_id, "Fetching invoice");

        let response = self
            .http
            .get(self.url(&path))
            .basic_auth(&self.settings.user, Some(&self.settings.password))
            .header(header::ACCEPT, "application/json")
            .query(&[("api_key", self.settings.api_key.as_str())])
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BillingError::NotFound {
                invoice_id: invoice_id.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| BillingError::Parse {
            message: e.to_string(),
        })
    }

    async fn record_payment(&self, record: &PaymentRecord) -> BillingResult<PaymentConfirmation> {
        debug!(
            invoice_id = %record.invoice_id,
            amount = %record.amount,
            "Recording payment"
        );

        // The platform's payment write takes querystring values, not a
        // POST body.
        let date = record.date.format("%Y-%m-%d").to_string();
        let response = self
            .http
            .post(self.url("payments.json"))
            .basic_auth(&self.settings.user, Some(&self.settings.password))
            .header(header::ACCEPT, "application/json")
            .query(&[
                ("api_key", self.settings.api_key.as_str()),
                ("payment[amount]", record.amount.as_str()),
                ("payment[invoice_id]", record.invoice_id.as_str()),
                ("payment[date]", date.as_str()),
                ("payment[payment_type]", record.payment_type),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if status != StatusCode::CREATED {
            return Err(BillingError::PlatformWrite {
                status: status.as_u16(),
                body,
            });
        }

        // A 201 is the success signal; a confirmation body that does not
        // decode is not treated as a failed write.
        Ok(serde_json::from_str(&body).unwrap_or(PaymentConfirmation { id: None }))
    }
}

fn transport(error: reqwest::Error) -> BillingError {
    BillingError::Transport {
        message: error.to_string(),
    }
}
