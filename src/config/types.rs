//! Configuration types for the invoice payment gateway.
//!
//! These strongly-typed structures are deserialized from the YAML
//! settings file. Credentials may be left empty in the file and supplied
//! through the environment instead; see the loader for the override and
//! validation rules.

use std::time::Duration;

use serde::Deserialize;

/// Settings for talking to the accounting platform.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountingSettings {
    /// Base URL of the platform (e.g., "https://example.lessaccounting.com").
    pub base_url: String,
    /// HTTP basic auth user. Env override: `ACCOUNTING_USER`.
    #[serde(default)]
    pub user: String,
    /// HTTP basic auth password. Env override: `ACCOUNTING_PASSWORD`.
    #[serde(default)]
    pub password: String,
    /// API key sent as a query parameter. Env override: `ACCOUNTING_API_KEY`.
    #[serde(default)]
    pub api_key: String,
}

/// Settings for talking to the payment processor.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorSettings {
    /// Charge-creation endpoint (e.g., "https://api.stripe.com/v1/charges").
    pub charge_url: String,
    /// Publishable key embedded in the hosted widget markup.
    /// Env override: `PROCESSOR_PUBLISHABLE_KEY`.
    #[serde(default)]
    pub publishable_key: String,
    /// Secret key authenticating charge calls.
    /// Env override: `PROCESSOR_SECRET_KEY`.
    #[serde(default)]
    pub secret_key: String,
}

/// The complete gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Company name shown in the hosted widget and page titles.
    pub company_name: String,
    /// Address the HTTP server binds to (e.g., "0.0.0.0:4567").
    pub listen_addr: String,
    /// Timeout in seconds applied to every outbound call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Accounting platform settings.
    pub accounting: AccountingSettings,
    /// Payment processor settings.
    pub processor: ProcessorSettings,
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Settings {
    /// The bounded timeout applied to every outbound HTTP call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_settings() {
        let yaml = r#"
company_name: "Flexible Creations, LLC"
listen_addr: "0.0.0.0:4567"
request_timeout_secs: 5
accounting:
  base_url: "https://example.lessaccounting.com"
  user: "user@example.com"
  password: "secret"
  api_key: "la_key"
processor:
  charge_url: "https://api.stripe.com/v1/charges"
  publishable_key: "pk_test_123"
  secret_key: "sk_test_123"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.company_name, "Flexible Creations, LLC");
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
        assert_eq!(settings.accounting.api_key, "la_key");
        assert_eq!(settings.processor.secret_key, "sk_test_123");
    }

    #[test]
    fn test_credentials_default_to_empty() {
        let yaml = r#"
company_name: "Test Co"
listen_addr: "127.0.0.1:0"
accounting:
  base_url: "https://example.lessaccounting.com"
processor:
  charge_url: "https://api.stripe.com/v1/charges"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.accounting.user.is_empty());
        assert!(settings.processor.secret_key.is_empty());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }
}
