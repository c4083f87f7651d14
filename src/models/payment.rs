//! Payment record and confirmation types for the accounting platform.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed payment type the platform expects for card payments.
pub const PAYMENT_TYPE: &str = "regular income";

/// A payment to be recorded against an invoice.
///
/// Constructed by the workflow only after a successful charge and sent
/// once to the accounting client. The amount is the original decimal
/// string submitted by the payer, never re-derived from minor units, so
/// no rounding drift can creep in between the charge and the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    /// The invoice the payment applies to.
    pub invoice_id: String,
    /// Decimal amount with two fraction digits (e.g., "150.00").
    pub amount: String,
    /// The calendar date of the payment.
    pub date: NaiveDate,
    /// Always [`PAYMENT_TYPE`].
    pub payment_type: &'static str,
}

impl PaymentRecord {
    /// Builds a payment record dated today (UTC).
    pub fn new(invoice_id: String, amount: String) -> Self {
        Self {
            invoice_id,
            amount,
            date: chrono::Utc::now().date_naive(),
            payment_type: PAYMENT_TYPE,
        }
    }
}

/// The platform's representation of a recorded payment, decoded from the
/// 201 response body. Only the fields the gateway displays are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Platform identifier for the created payment, when present.
    #[serde(default)]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dated_today_with_fixed_type() {
        let record = PaymentRecord::new("42".to_string(), "150.00".to_string());
        assert_eq!(record.invoice_id, "42");
        assert_eq!(record.amount, "150.00");
        assert_eq!(record.date, chrono::Utc::now().date_naive());
        assert_eq!(record.payment_type, "regular income");
    }

    #[test]
    fn test_confirmation_decodes_with_or_without_id() {
        let confirmation: PaymentConfirmation = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(confirmation.id, Some(7));

        let confirmation: PaymentConfirmation = serde_json::from_str("{}").unwrap();
        assert_eq!(confirmation.id, None);
    }
}
