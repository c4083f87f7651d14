//! Workflow outcome types: the contract between the payment workflow and
//! the presentation layer.

use rust_decimal::Decimal;

use super::invoice::Invoice;
use super::payment::PaymentConfirmation;

/// Result of preparing a payment for an invoice.
///
/// Either the invoice is already settled (terminal, no widget is shown),
/// or the caller is handed the balance so it can collect a card token
/// out-of-band via the hosted widget.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentPrompt {
    /// The invoice balance is zero; no charge is attempted.
    AlreadyPaid {
        /// The settled invoice.
        invoice: Invoice,
    },
    /// The invoice has an outstanding balance awaiting a charge submission.
    AwaitingCharge {
        /// The invoice being paid.
        invoice: Invoice,
        /// The outstanding balance (`total - payment_total`).
        balance_due: Decimal,
    },
}

/// Terminal outcome of a charge submission.
///
/// Every submission produces exactly one of these; no path swallows a
/// failure without a user-visible result.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// The charge succeeded and the payment was recorded in the
    /// accounting platform.
    Paid {
        /// The invoice reference the payment applied to.
        invoice_number: String,
        /// The decimal amount that was charged and recorded.
        amount: String,
        /// The platform's confirmation of the recorded payment.
        confirmation: PaymentConfirmation,
    },
    /// The processor declined or could not attempt the charge. No money
    /// moved on the accounting side; retrying the whole attempt is safe.
    ChargeFailed {
        /// Human-readable decline reason.
        reason: String,
    },
    /// The charge succeeded but the platform rejected the payment write.
    /// Money has been collected with no matching record; this requires
    /// manual reconciliation and must not be retried blindly.
    RecordingFailed {
        /// The processor's charge identifier, needed for reconciliation.
        charge_id: String,
        /// Description of the failed write.
        reason: String,
    },
}
