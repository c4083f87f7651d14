//! Charge request and outcome types for the payment processor.

/// The only currency the gateway charges in.
pub const CHARGE_CURRENCY: &str = "usd";

/// A single card charge attempt, created per payment submission and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Amount in integer minor units (cents).
    pub amount_minor: u64,
    /// ISO currency code; always [`CHARGE_CURRENCY`].
    pub currency: &'static str,
    /// Human-readable description shown on the processor side.
    pub description: String,
    /// Single-use opaque card token from the hosted widget.
    pub card_token: String,
}

impl ChargeRequest {
    /// Builds a charge request for an invoice.
    pub fn new(amount_minor: u64, invoice_number: &str, card_token: String) -> Self {
        Self {
            amount_minor,
            currency: CHARGE_CURRENCY,
            description: format!("Payment for invoice {}", invoice_number),
            card_token,
        }
    }
}

/// Terminal result of a charge attempt.
///
/// Declines, invalid tokens, and transport failures are all folded into
/// [`ChargeOutcome::Failed`] by the charge client; a charge call never
/// propagates an error to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// The processor accepted the charge.
    Succeeded {
        /// Processor-assigned charge identifier.
        charge_id: String,
    },
    /// The processor declined the charge, or it could not be attempted.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_description_from_invoice_number() {
        let request = ChargeRequest::new(15000, "INV-42", "tok_visa".to_string());
        assert_eq!(request.amount_minor, 15000);
        assert_eq!(request.currency, "usd");
        assert_eq!(request.description, "Payment for invoice INV-42");
        assert_eq!(request.card_token, "tok_visa");
    }
}
