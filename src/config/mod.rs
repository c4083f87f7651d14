//! Configuration loading and management for the invoice payment gateway.
//!
//! Settings are loaded once at process start from a YAML file, with
//! credentials overridable from the environment, and passed by reference
//! into the clients. There is no ambient/global settings object.
//!
//! # Example
//!
//! ```no_run
//! use invoice_gateway::config::Settings;
//!
//! let settings = Settings::load("./config/gateway.yaml").unwrap();
//! println!("Serving for {}", settings.company_name);
//! ```

mod loader;
mod types;

pub use types::{AccountingSettings, ProcessorSettings, Settings};
