//! HTTP surface for the invoice payment gateway.
//!
//! This module provides the inbound routes: the invoice listings, the
//! pay page that embeds the hosted card-capture widget, and the charge
//! submission endpoint.

mod handlers;
mod request;
mod response;
mod state;
mod views;

pub use handlers::create_router;
pub use request::ChargeForm;
pub use response::ErrorPage;
pub use state::AppState;
