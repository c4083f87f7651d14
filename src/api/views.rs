//! HTML page rendering.
//!
//! The pages are small enough that `format!`-built markup keeps the whole
//! presentation in one place; values interpolated into markup are
//! HTML-escaped first. The card-capture widget itself is hosted by the
//! payment processor and only embedded here.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::Invoice;
use crate::money;

/// Escapes a value for interpolation into HTML text or attributes.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps page content in the shared layout.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// The invoice listing page for `/unpaid` and `/paid`.
pub fn invoice_list(title: &str, invoices: &[Invoice]) -> String {
    let mut rows = String::new();
    for invoice in invoices {
        rows.push_str(&format!(
            "<tr><td><a href=\"/pay/{id}\">Pay Now</a></td><td>{number}</td>\
             <td>{due}</td><td>{total}</td></tr>\n",
            id = escape(&invoice.id),
            number = escape(&invoice.reference_name_number),
            due = invoice.due_on,
            total = money::decimal_to_string(invoice.total),
        ));
    }

    let body = format!(
        "<h1>{}</h1>\n<table>\n\
         <tr><td></td><td>Invoice Number</td><td>Due Date</td><td>Amount</td></tr>\n\
         {}</table>",
        escape(title),
        rows
    );
    layout(title, &body)
}

/// The paid-in-full page shown when an invoice has no balance due.
pub fn paid_in_full(invoice: &Invoice) -> String {
    let title = format!("Invoice {}", invoice.reference_name_number);
    let body = format!(
        "<h1>{}</h1>\n<p>This invoice is paid in full. Thank you for verifying it has been paid.</p>",
        escape(&title)
    );
    layout(&title, &body)
}

/// The payment form embedding the hosted card-capture widget.
pub fn payment_form(invoice: &Invoice, balance_due: Decimal, settings: &Settings) -> String {
    let title = format!("Pay invoice {}", invoice.reference_name_number);
    let amount = money::decimal_to_string(balance_due);
    // The widget needs the amount in minor units. A balance the converter
    // rejects (e.g., negative platform data) renders as zero; the charge
    // submission will be rejected by the same validation anyway.
    let amount_minor = money::to_minor_units(&amount).unwrap_or(0);

    let body = format!(
        "<h1>{title}</h1>\n\
         <table>\n\
         <tr><td>Invoice Total</td><td>&nbsp;</td><td>{total}</td></tr>\n\
         <tr><td>Payments made</td><td>&nbsp;</td><td>{payments}</td></tr>\n\
         <tr><td>Amount owed</td><td>&nbsp;</td><td>{amount}</td></tr>\n\
         </table>\n\
         <form action=\"/charge\" method=\"post\" class=\"payment\">\n\
         <input type=\"hidden\" name=\"invoiceid\" value=\"{id}\" />\n\
         <input type=\"hidden\" name=\"invoicenum\" value=\"{number}\" />\n\
         <input type=\"hidden\" name=\"invoiceamount\" value=\"{amount}\" />\n\
         <p><label class=\"email\"><span>Please enter your email address:\n\
         <input type=\"text\" name=\"email\" /></span></label></p>\n\
         <script src=\"https://checkout.stripe.com/v2/checkout.js\" class=\"stripe-button\"\n\
         data-key=\"{publishable_key}\"\n\
         data-amount=\"{amount_minor}\"\n\
         data-name=\"{company}\"\n\
         data-description=\"Payment for Invoice {number}\">\n\
         </script>\n\
         </form>",
        title = escape(&title),
        total = money::decimal_to_string(invoice.total),
        payments = money::decimal_to_string(invoice.payment_total),
        amount = escape(&amount),
        id = escape(&invoice.id),
        number = escape(&invoice.reference_name_number),
        publishable_key = escape(&settings.processor.publishable_key),
        amount_minor = amount_minor,
        company = escape(&settings.company_name),
    );
    layout(&title, &body)
}

/// The payment-received page.
pub fn charge_success(invoice_number: &str, amount: &str) -> String {
    let body = format!(
        "<h1>Payment received</h1>\n\
         <p>A payment in the amount of ${} has been applied to invoice {}.</p>\n\
         <p>Thank you for your business!</p>",
        escape(amount),
        escape(invoice_number)
    );
    layout("Payment received", &body)
}

/// The payment-declined page, with an option to retry the whole attempt.
///
/// Retrying here is safe: a declined charge moved no money.
pub fn payment_issue(invoice_id: &str, reason: &str) -> String {
    let body = format!(
        "<h1>Issue with payment</h1>\n\
         <p>Unfortunately there was a problem with your payment.</p>\n\
         <p>{}</p>\n\
         <p>Please try your payment again or contact us with any questions.</p>\n\
         <a href=\"/pay/{}\">Try Payment Again</a>",
        escape(reason),
        escape(invoice_id)
    );
    layout("Issue with payment", &body)
}

/// The recording-failed page.
///
/// The card has been charged but the accounting platform has no record of
/// it. This page deliberately carries no retry link: a second attempt
/// would charge the card again.
pub fn recording_failed(charge_id: &str) -> String {
    let body = format!(
        "<h1>Payment received, recording pending</h1>\n\
         <p>Your card has been charged, but we could not record the payment \
         against your invoice. Do not retry the payment.</p>\n\
         <p>Please contact us and quote charge reference {} so we can \
         reconcile it manually.</p>",
        escape(charge_id)
    );
    layout("Payment received, recording pending", &body)
}

/// A generic error page.
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!("<h1>{}</h1>\n<p>{}</p>", escape(title), escape(message));
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountingSettings, ProcessorSettings};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: "42".to_string(),
            reference_name_number: "INV-42".to_string(),
            due_on: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            total: Decimal::from_str("150.00").unwrap(),
            payment_total: Decimal::from_str("50.00").unwrap(),
        }
    }

    fn sample_settings() -> Settings {
        Settings {
            company_name: "Test & Co".to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
            request_timeout_secs: 10,
            accounting: AccountingSettings {
                base_url: "https://example.lessaccounting.com".to_string(),
                user: "user".to_string(),
                password: "pass".to_string(),
                api_key: "key".to_string(),
            },
            processor: ProcessorSettings {
                charge_url: "https://api.stripe.com/v1/charges".to_string(),
                publishable_key: "pk_test_123".to_string(),
                secret_key: "sk_test_123".to_string(),
            },
        }
    }

    #[test]
    fn test_escape_handles_markup_characters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_invoice_list_links_to_pay_page() {
        let html = invoice_list("Unpaid Invoices", &[sample_invoice()]);
        assert!(html.contains("<a href=\"/pay/42\">Pay Now</a>"));
        assert!(html.contains("INV-42"));
        assert!(html.contains("150.00"));
    }

    #[test]
    fn test_payment_form_embeds_widget_with_minor_units() {
        let invoice = sample_invoice();
        let balance = invoice.balance_due();
        let html = payment_form(&invoice, balance, &sample_settings());

        assert!(html.contains("data-key=\"pk_test_123\""));
        assert!(html.contains("data-amount=\"10000\""));
        assert!(html.contains("data-name=\"Test &amp; Co\""));
        assert!(html.contains("name=\"invoiceamount\" value=\"100.00\""));
        assert!(html.contains("name=\"invoiceid\" value=\"42\""));
    }

    #[test]
    fn test_charge_success_shows_amount_and_invoice() {
        let html = charge_success("INV-42", "150.00");
        assert!(html.contains("$150.00"));
        assert!(html.contains("INV-42"));
    }

    #[test]
    fn test_payment_issue_offers_retry() {
        let html = payment_issue("42", "Your card was declined.");
        assert!(html.contains("<a href=\"/pay/42\">Try Payment Again</a>"));
        assert!(html.contains("Your card was declined."));
    }

    #[test]
    fn test_recording_failed_has_no_retry_link() {
        let html = recording_failed("ch_456");
        assert!(html.contains("ch_456"));
        assert!(html.contains("Do not retry"));
        assert!(!html.contains("Try Payment Again"));
    }
}
