//! The payment workflow state machine.
//!
//! ```text
//! Start --get_invoice--> InvoiceFetched --> AlreadyPaid        (terminal)
//!                                       \-> AwaitingCharge
//! AwaitingCharge --charge--> ChargeFailed                      (terminal)
//!                        \-> charged --record_payment--> Paid  (terminal)
//!                                                    \-> RecordingFailed
//! ```
//!
//! Every submission ends in exactly one terminal outcome. No call is ever
//! retried: a blind retry of the charge call risks double-charging a card,
//! and a retry of the payment write after a successful charge risks the
//! same through the caller pressing "try again".

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::clients::{AccountingApi, ChargeApi};
use crate::error::BillingResult;
use crate::models::{ChargeOutcome, ChargeRequest, PaymentPrompt, PaymentRecord, WorkflowOutcome};
use crate::money;

/// A charge submission posted back by the payment form after the hosted
/// widget has exchanged the card details for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeSubmission {
    /// The invoice the payment applies to.
    pub invoice_id: String,
    /// The human-readable invoice reference, used in the charge
    /// description and the confirmation page.
    pub invoice_number: String,
    /// Decimal amount with exactly two fraction digits.
    pub amount: String,
    /// The payer's email address (display only; the processor gets the
    /// token, not the address).
    pub payer_email: String,
    /// Single-use card token from the hosted widget.
    pub card_token: String,
}

/// Orchestrates invoice fetch, charge, and payment recording over the two
/// client seams.
///
/// The workflow owns no mutable state; concurrent invocations for
/// different invoices are fully independent.
#[derive(Clone)]
pub struct PaymentWorkflow {
    accounting: Arc<dyn AccountingApi>,
    processor: Arc<dyn ChargeApi>,
}

impl PaymentWorkflow {
    /// Creates a workflow over the given clients.
    pub fn new(accounting: Arc<dyn AccountingApi>, processor: Arc<dyn ChargeApi>) -> Self {
        Self {
            accounting,
            processor,
        }
    }

    /// Fetches an invoice and decides whether a charge should be offered.
    ///
    /// Client failures propagate unchanged; nothing has moved yet, so the
    /// caller may surface them freely. A zero balance short-circuits: no
    /// charge is attempted and no widget is shown. The balance is taken
    /// from the platform's figures without independent validation.
    pub async fn prepare(&self, invoice_id: &str) -> BillingResult<PaymentPrompt> {
        let invoice = self.accounting.get_invoice(invoice_id).await?;
        let balance_due = invoice.balance_due();

        if balance_due.is_zero() {
            info!(invoice_id = %invoice.id, "Invoice already paid in full");
            return Ok(PaymentPrompt::AlreadyPaid { invoice });
        }

        info!(
            invoice_id = %invoice.id,
            balance_due = %balance_due,
            "Invoice awaiting charge"
        );
        Ok(PaymentPrompt::AwaitingCharge {
            invoice,
            balance_due,
        })
    }

    /// Runs a charge submission to a terminal outcome.
    ///
    /// The only `Err` this returns is an invalid submitted amount, which
    /// is rejected before any money moves. Once the charge client has
    /// been called, every path yields an `Ok(WorkflowOutcome)`.
    pub async fn submit(&self, submission: ChargeSubmission) -> BillingResult<WorkflowOutcome> {
        let amount_minor = money::to_minor_units(&submission.amount)?;
        let request = ChargeRequest::new(
            amount_minor,
            &submission.invoice_number,
            submission.card_token.clone(),
        );

        info!(
            invoice_id = %submission.invoice_id,
            amount_minor = amount_minor,
            "Charging card"
        );

        let charge_id = match self.processor.charge(&request).await {
            ChargeOutcome::Failed { reason } => {
                // No accounting write happens; the invoice balance is
                // untouched and the whole attempt may be retried.
                warn!(
                    invoice_id = %submission.invoice_id,
                    reason = %reason,
                    "Charge failed"
                );
                return Ok(WorkflowOutcome::ChargeFailed { reason });
            }
            ChargeOutcome::Succeeded { charge_id } => charge_id,
        };

        // The recorded amount is the original submitted string, never
        // re-derived from minor units, so the platform sees exactly what
        // the payer approved.
        let record = PaymentRecord::new(submission.invoice_id.clone(), submission.amount.clone());

        match self.accounting.record_payment(&record).await {
            Ok(confirmation) => {
                info!(
                    invoice_id = %submission.invoice_id,
                    charge_id = %charge_id,
                    amount = %record.amount,
                    "Payment recorded"
                );
                Ok(WorkflowOutcome::Paid {
                    invoice_number: submission.invoice_number,
                    amount: submission.amount,
                    confirmation,
                })
            }
            Err(write_error) => {
                // Money has been collected with no matching record. This
                // is the inconsistency class: surface it loudly and keep
                // the charge id for manual reconciliation.
                error!(
                    invoice_id = %submission.invoice_id,
                    charge_id = %charge_id,
                    error = %write_error,
                    "Charge collected but payment write failed; manual reconciliation required"
                );
                Ok(WorkflowOutcome::RecordingFailed {
                    charge_id,
                    reason: write_error.to_string(),
                })
            }
        }
    }
}
