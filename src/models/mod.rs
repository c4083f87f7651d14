//! Core data models for the invoice payment gateway.
//!
//! All entities here are transient request-scoped values; nothing in the
//! gateway persists across requests.

mod charge;
mod invoice;
mod outcome;
mod payment;

pub use charge::{ChargeOutcome, ChargeRequest, CHARGE_CURRENCY};
pub use invoice::{Invoice, InvoiceStatus};
pub use outcome::{PaymentPrompt, WorkflowOutcome};
pub use payment::{PaymentConfirmation, PaymentRecord, PAYMENT_TYPE};
