//! Error types for the invoice payment gateway.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while talking to the accounting
//! platform and the payment processor.

use thiserror::Error;

/// The main error type for the invoice payment gateway.
///
/// All fallible operations in the gateway return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use invoice_gateway::error::BillingError;
///
/// let error = BillingError::NotFound {
///     invoice_id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invoice not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum BillingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required credential was neither configured nor present in the
    /// environment.
    #[error("Missing credential: {name}")]
    MissingCredential {
        /// The name of the missing credential.
        name: String,
    },

    /// A network-level failure talking to a remote service.
    #[error("Transport error: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// A remote response body was not in the expected structured format.
    #[error("Failed to parse response: {message}")]
    Parse {
        /// A description of what failed to decode.
        message: String,
    },

    /// The accounting platform reported no such invoice.
    #[error("Invoice not found: {invoice_id}")]
    NotFound {
        /// The invoice identifier that was not found.
        invoice_id: String,
    },

    /// The accounting platform rejected a payment write with a non-201
    /// status. The raw body is carried for diagnostic display.
    #[error("Payment write rejected with status {status}")]
    PlatformWrite {
        /// The HTTP status returned by the platform.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A submitted payment amount was not a valid two-decimal string.
    #[error("Invalid amount '{input}': {message}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
        /// A description of what made it invalid.
        message: String,
    },
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
