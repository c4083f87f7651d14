//! Clients for the two external collaborators: the accounting platform
//! and the payment processor.
//!
//! Each client is fronted by an async trait so the workflow and the HTTP
//! surface can be exercised against mocks; the real implementations are
//! thin `reqwest` wrappers with a bounded timeout on every call.

mod accounting;
mod processor;

pub use accounting::{AccountingApi, HttpAccountingClient};
pub use processor::{ChargeApi, StripeChargeClient};

#[cfg(test)]
pub use accounting::MockAccountingApi;
#[cfg(test)]
pub use processor::MockChargeApi;
