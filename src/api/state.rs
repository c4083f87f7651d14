//! Application state for the invoice payment gateway.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clients::{AccountingApi, ChargeApi};
use crate::config::Settings;
use crate::workflow::PaymentWorkflow;

/// Shared application state.
///
/// Holds the two client seams and the process settings. Everything here
/// is immutable after startup, so concurrent requests are independent.
#[derive(Clone)]
pub struct AppState {
    accounting: Arc<dyn AccountingApi>,
    processor: Arc<dyn ChargeApi>,
    settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new application state over the given clients and settings.
    pub fn new(
        accounting: Arc<dyn AccountingApi>,
        processor: Arc<dyn ChargeApi>,
        settings: Settings,
    ) -> Self {
        Self {
            accounting,
            processor,
            settings: Arc::new(settings),
        }
    }

    /// Returns the accounting client.
    pub fn accounting(&self) -> &Arc<dyn AccountingApi> {
        &self.accounting
    }

    /// Builds a payment workflow over the shared clients.
    pub fn workflow(&self) -> PaymentWorkflow {
        PaymentWorkflow::new(Arc::clone(&self.accounting), Arc::clone(&self.processor))
    }

    /// Returns the process settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
