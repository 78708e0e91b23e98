//! Order submission state and outcome classification.

use crate::cart::Cart;
use crate::checkout::{CheckoutForm, OrderReply, OrderRequest};
use crate::error::CommerceError;
use crate::i18n::{Label, Language};

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx with a message: the order went through.
    Placed { message: String },
    /// Non-2xx with a message: the endpoint refused the order.
    Rejected { status: u16, message: String },
    /// Transport error or unreadable reply.
    Failed { reason: String },
}

impl SubmitOutcome {
    /// Classify an HTTP reply by status and body.
    pub fn from_reply(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<OrderReply>(body) {
            Ok(reply) if (200..300).contains(&status) => SubmitOutcome::Placed {
                message: reply.message,
            },
            Ok(reply) => SubmitOutcome::Rejected {
                status,
                message: reply.message,
            },
            Err(e) => SubmitOutcome::Failed {
                reason: format!("unreadable reply (status {}): {}", status, e),
            },
        }
    }

    /// The request never completed.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        SubmitOutcome::Failed {
            reason: reason.into(),
        }
    }

    /// Whether the cart should be cleared and the form reset.
    pub fn is_placed(&self) -> bool {
        matches!(self, SubmitOutcome::Placed { .. })
    }

    /// Message shown to the customer.
    pub fn notice(&self, lang: Language) -> String {
        match self {
            SubmitOutcome::Placed { message } | SubmitOutcome::Rejected { message, .. } => {
                message.clone()
            }
            SubmitOutcome::Failed { .. } => Label::OrderFailed.text(lang).to_string(),
        }
    }
}

/// Rendered state of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Tracks the single in-flight order submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutSubmitter {
    in_flight: bool,
}

impl CheckoutSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    /// Validate and build the payload, then mark the submission in flight.
    pub fn begin(&mut self, form: &CheckoutForm, cart: &Cart) -> Result<OrderRequest, CommerceError> {
        if self.in_flight {
            return Err(CommerceError::SubmissionInFlight);
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;

        self.in_flight = true;
        Ok(OrderRequest::new(form, cart))
    }

    /// Mark the submission finished, whatever the outcome.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn button(&self, lang: Language) -> SubmitButton {
        if self.in_flight {
            SubmitButton {
                label: Label::Sending.text(lang),
                disabled: true,
            }
        } else {
            SubmitButton {
                label: Label::PlaceOrder.text(lang),
                disabled: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;
    use crate::ids::ProductId;
    use crate::money::Taka;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Rahim".to_string(),
            phone: "01700000000".to_string(),
            address: "Dhaka".to_string(),
            ..CheckoutForm::default()
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), Localized::new("Rice", "চাল"), Taka::new(50), 1)
            .unwrap();
        cart
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(
            SubmitOutcome::from_reply(200, br#"{"message":"ok"}"#),
            SubmitOutcome::Placed {
                message: "ok".to_string()
            }
        );
        assert_eq!(
            SubmitOutcome::from_reply(500, br#"{"message":"Server misconfiguration"}"#),
            SubmitOutcome::Rejected {
                status: 500,
                message: "Server misconfiguration".to_string()
            }
        );
        assert!(matches!(
            SubmitOutcome::from_reply(200, b"<html>"),
            SubmitOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_notices() {
        let rejected = SubmitOutcome::from_reply(400, br#"{"message":"bad phone"}"#);
        assert_eq!(rejected.notice(Language::En), "bad phone");
        assert!(!rejected.is_placed());

        let failed = SubmitOutcome::transport_failure("connection refused");
        assert_eq!(
            failed.notice(Language::Bn),
            "Failed to place order. Please try again."
        );
    }

    #[test]
    fn test_button_tracks_in_flight() {
        let mut submitter = CheckoutSubmitter::new();
        assert_eq!(
            submitter.button(Language::En),
            SubmitButton {
                label: "Place Order",
                disabled: false
            }
        );

        submitter.begin(&form(), &cart()).unwrap();
        assert_eq!(
            submitter.button(Language::En),
            SubmitButton {
                label: "Sending...",
                disabled: true
            }
        );

        submitter.finish();
        assert!(!submitter.button(Language::En).disabled);
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut submitter = CheckoutSubmitter::new();
        submitter.begin(&form(), &cart()).unwrap();
        assert!(matches!(
            submitter.begin(&form(), &cart()),
            Err(CommerceError::SubmissionInFlight)
        ));
    }

    #[test]
    fn test_begin_validates() {
        let mut submitter = CheckoutSubmitter::new();
        assert!(matches!(
            submitter.begin(&form(), &Cart::new()),
            Err(CommerceError::EmptyCart)
        ));
        assert!(matches!(
            submitter.begin(&CheckoutForm::default(), &cart()),
            Err(CommerceError::CheckoutIncomplete(_))
        ));
        assert!(!submitter.is_sending());
    }
}
