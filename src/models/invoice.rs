//! Invoice model as read from the accounting platform.
//!
//! The platform owns invoices; this system only reads them. The decode
//! step is validating: missing or malformed fields fail deserialization
//! instead of surfacing as runtime errors on missing keys.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Invoice listing status recognised by the accounting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    /// Invoices with an outstanding balance.
    Unpaid,
    /// Invoices that have been settled.
    Paid,
}

impl InvoiceStatus {
    /// The path segment the platform uses for this status
    /// (`invoices/unpaid.json`, `invoices/paid.json`).
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// A billable record in the accounting platform.
///
/// # Example
///
/// ```
/// use invoice_gateway::models::Invoice;
/// use rust_decimal::Decimal;
///
/// let invoice: Invoice = serde_json::from_str(
///     r#"{
///         "id": 42,
///         "reference_name_number": "INV-42",
///         "due_on": "2026-02-01",
///         "total": 150.00,
///         "payment_total": 0.00
///     }"#,
/// ).unwrap();
/// assert_eq!(invoice.id, "42");
/// assert_eq!(invoice.balance_due(), Decimal::new(150, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Platform identifier for the invoice. The platform emits numeric
    /// ids; they are only ever interpolated into URLs here, so they are
    /// carried as strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Human-readable invoice reference (e.g., "INV-42").
    pub reference_name_number: String,
    /// The date the invoice is due.
    pub due_on: NaiveDate,
    /// Total amount due on the invoice.
    pub total: Decimal,
    /// Cumulative payments already applied.
    pub payment_total: Decimal,
}

impl Invoice {
    /// Outstanding balance: `total - payment_total`.
    ///
    /// The platform's figures are taken as given; a negative balance from
    /// bad platform data flows through unchanged.
    pub fn balance_due(&self) -> Decimal {
        self.total - self.payment_total
    }
}

/// Accepts either a JSON string or a JSON integer for an identifier field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_json(total: &str, payment_total: &str) -> String {
        format!(
            r#"{{
                "id": 42,
                "reference_name_number": "INV-42",
                "due_on": "2026-02-01",
                "total": {},
                "payment_total": {}
            }}"#,
            total, payment_total
        )
    }

    #[test]
    fn test_decodes_numeric_id_as_string() {
        let invoice: Invoice = serde_json::from_str(&sample_json("150.0", "0")).unwrap();
        assert_eq!(invoice.id, "42");
        assert_eq!(invoice.reference_name_number, "INV-42");
    }

    #[test]
    fn test_decodes_string_id() {
        let json = r#"{
            "id": "inv_42",
            "reference_name_number": "INV-42",
            "due_on": "2026-02-01",
            "total": 150.0,
            "payment_total": 0
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, "inv_42");
    }

    #[test]
    fn test_missing_field_fails_decode() {
        let json = r#"{
            "id": 42,
            "due_on": "2026-02-01",
            "total": 150.0,
            "payment_total": 0
        }"#;
        assert!(serde_json::from_str::<Invoice>(json).is_err());
    }

    #[test]
    fn test_malformed_date_fails_decode() {
        let json = r#"{
            "id": 42,
            "reference_name_number": "INV-42",
            "due_on": "not-a-date",
            "total": 150.0,
            "payment_total": 0
        }"#;
        assert!(serde_json::from_str::<Invoice>(json).is_err());
    }

    #[test]
    fn test_balance_due_subtracts_payments() {
        let invoice: Invoice = serde_json::from_str(&sample_json("150.00", "50.00")).unwrap();
        assert_eq!(invoice.balance_due(), Decimal::from_str("100.00").unwrap());
    }

    #[test]
    fn test_balance_due_zero_when_settled() {
        let invoice: Invoice = serde_json::from_str(&sample_json("150.00", "150.00")).unwrap();
        assert_eq!(invoice.balance_due(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_balance_flows_through() {
        // Bad platform data is not second-guessed.
        let invoice: Invoice = serde_json::from_str(&sample_json("100.00", "150.00")).unwrap();
        assert_eq!(invoice.balance_due(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_status_path_segments() {
        assert_eq!(InvoiceStatus::Unpaid.as_path_segment(), "unpaid");
        assert_eq!(InvoiceStatus::Paid.as_path_segment(), "paid");
    }
}
