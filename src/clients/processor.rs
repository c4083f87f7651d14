//! Client for the payment processor's charge-creation API.
//!
//! The charge call is the one place money actually moves, so its failure
//! handling is deliberately total: declines, invalid tokens, transport
//! failures, and unexpected response bodies all fold into
//! [`ChargeOutcome::Failed`] rather than propagating. The workflow always
//! sees a terminal result.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ProcessorSettings;
use crate::error::{BillingError, BillingResult};
use crate::models::{ChargeOutcome, ChargeRequest};

/// Charge submission against the payment processor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChargeApi: Send + Sync {
    /// Attempts to charge the card token for the given amount.
    async fn charge(&self, request: &ChargeRequest) -> ChargeOutcome;
}

/// Successful charge body; only the identifier is needed downstream.
#[derive(Debug, Deserialize)]
struct ChargeCreated {
    id: String,
}

/// Error body shape the processor returns on declines.
#[derive(Debug, Deserialize)]
struct ChargeError {
    error: ChargeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ChargeErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// `reqwest`-backed [`ChargeApi`] implementation for a Stripe-style
/// charge endpoint.
pub struct StripeChargeClient {
    http: reqwest::Client,
    settings: ProcessorSettings,
}

impl StripeChargeClient {
    /// Builds a client with the given processor settings and a bounded
    /// per-request timeout.
    pub fn new(settings: ProcessorSettings, timeout: Duration) -> BillingResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BillingError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self { http, settings })
    }

    async fn try_charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome, String> {
        let amount = request.amount_minor.to_string();
        let form = [
            ("amount", amount.as_str()),
            ("currency", request.currency),
            ("description", request.description.as_str()),
            ("card", request.card_token.as_str()),
        ];

        // The processor authenticates with the secret key as the basic
        // auth user and no password.
        let response = self
            .http
            .post(&self.settings.charge_url)
            .basic_auth(&self.settings.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        if status.is_success() {
            let created: ChargeCreated = serde_json::from_str(&body)
                .map_err(|_| "unexpected response from payment processor".to_string())?;
            return Ok(ChargeOutcome::Succeeded {
                charge_id: created.id,
            });
        }

        let reason = serde_json::from_str::<ChargeError>(&body)
            .ok()
            .and_then(|e| e.error.message.or(e.error.code))
            .unwrap_or_else(|| format!("payment processor returned status {}", status.as_u16()));
        Ok(ChargeOutcome::Failed { reason })
    }
}

#[async_trait]
impl ChargeApi for StripeChargeClient {
    async fn charge(&self, request: &ChargeRequest) -> ChargeOutcome {
        debug!(
            amount_minor = request.amount_minor,
            description = %request.description,
            "Submitting charge"
        );

        match self.try_charge(request).await {
            Ok(outcome) => outcome,
            Err(reason) => {
                warn!(reason = %reason, "Charge attempt could not be completed");
                ChargeOutcome::Failed { reason }
            }
        }
    }
}
