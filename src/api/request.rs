//! Request types for the gateway's inbound HTTP surface.

use serde::{Deserialize, Serialize};

use crate::workflow::ChargeSubmission;

/// Form body posted to `/charge` by the payment form.
///
/// The field names match what the payment form and the hosted widget
/// submit; `stripeToken` is the widget's token field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeForm {
    /// Decimal amount being paid (e.g., "150.00").
    pub invoiceamount: String,
    /// The payer's email address.
    pub email: String,
    /// Human-readable invoice reference.
    pub invoicenum: String,
    /// Platform identifier of the invoice.
    pub invoiceid: String,
    /// Single-use card token from the hosted widget.
    #[serde(rename = "stripeToken")]
    pub stripe_token: String,
}

impl From<ChargeForm> for ChargeSubmission {
    fn from(form: ChargeForm) -> Self {
        ChargeSubmission {
            invoice_id: form.invoiceid,
            invoice_number: form.invoicenum,
            amount: form.invoiceamount,
            payer_email: form.email,
            card_token: form.stripe_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_urlencoded_form() {
        let body = "invoiceamount=150.00&email=payer%40example.com&invoicenum=INV-42\
                    &invoiceid=42&stripeToken=tok_visa";
        let form: ChargeForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.invoiceamount, "150.00");
        assert_eq!(form.email, "payer@example.com");
        assert_eq!(form.stripe_token, "tok_visa");
    }

    #[test]
    fn test_conversion_to_submission() {
        let form = ChargeForm {
            invoiceamount: "150.00".to_string(),
            email: "payer@example.com".to_string(),
            invoicenum: "INV-42".to_string(),
            invoiceid: "42".to_string(),
            stripe_token: "tok_visa".to_string(),
        };

        let submission: ChargeSubmission = form.into();
        assert_eq!(submission.invoice_id, "42");
        assert_eq!(submission.invoice_number, "INV-42");
        assert_eq!(submission.amount, "150.00");
        assert_eq!(submission.card_token, "tok_visa");
    }
}
