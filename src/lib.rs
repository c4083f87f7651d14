//! Invoice Payment Gateway
//!
//! This crate bridges an accounting platform's invoice API and a payment
//! processor's charge API: a customer views unpaid invoices, pays one via
//! the processor's hosted card-capture widget, and on a successful charge
//! the payment is recorded back in the accounting platform.

#![warn(missing_docs)]

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod workflow;
