//! Settings loading: YAML file plus environment overrides.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{BillingError, BillingResult};

use super::types::Settings;

impl Settings {
    /// Loads settings from the given YAML file and applies environment
    /// overrides for credentials.
    ///
    /// Environment variables, when set, take precedence over the file:
    /// `ACCOUNTING_USER`, `ACCOUNTING_PASSWORD`, `ACCOUNTING_API_KEY`,
    /// `PROCESSOR_PUBLISHABLE_KEY`, `PROCESSOR_SECRET_KEY`. Any credential
    /// still empty after the overrides fails with
    /// [`BillingError::MissingCredential`], so a misconfigured process
    /// refuses to start instead of failing on its first outbound call.
    pub fn load<P: AsRef<Path>>(path: P) -> BillingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BillingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| BillingError::ConfigParse {
                path: path_str,
                message: e.to_string(),
            })?;

        settings.apply_env_overrides();
        settings.validate_credentials()?;
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        override_from_env(&mut self.accounting.user, "ACCOUNTING_USER");
        override_from_env(&mut self.accounting.password, "ACCOUNTING_PASSWORD");
        override_from_env(&mut self.accounting.api_key, "ACCOUNTING_API_KEY");
        override_from_env(
            &mut self.processor.publishable_key,
            "PROCESSOR_PUBLISHABLE_KEY",
        );
        override_from_env(&mut self.processor.secret_key, "PROCESSOR_SECRET_KEY");
    }

    fn validate_credentials(&self) -> BillingResult<()> {
        let required = [
            (&self.accounting.user, "accounting.user"),
            (&self.accounting.password, "accounting.password"),
            (&self.accounting.api_key, "accounting.api_key"),
            (&self.processor.publishable_key, "processor.publishable_key"),
            (&self.processor.secret_key, "processor.secret_key"),
        ];
        for (value, name) in required {
            if value.is_empty() {
                return Err(BillingError::MissingCredential {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn override_from_env(target: &mut String, var: &str) {
    if let Ok(value) = env::var(var) {
        if !value.is_empty() {
            *target = value;
        }
    }
}
