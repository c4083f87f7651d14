//! The payment-reconciliation workflow: the sequence of external calls,
//! the money-unit conversion, and the success/failure branching that
//! determines what the user sees and what gets recorded.

mod payment;

pub use payment::{ChargeSubmission, PaymentWorkflow};
