//! Order payload types.

use crate::cart::{Cart, LineItem};
use crate::error::CommerceError;
use crate::money::Taka;
use serde::{Deserialize, Serialize};

/// Checkout form fields as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub message: String,
}

impl CheckoutForm {
    /// Check the required fields (name, phone, address) are filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Body posted to the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub message: String,
    pub cart: Vec<LineItem>,
}

impl OrderRequest {
    /// Snapshot the form and the cart into one payload.
    pub fn new(form: &CheckoutForm, cart: &Cart) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
            message: form.message.clone(),
            cart: cart.items().to_vec(),
        }
    }

    pub fn total(&self) -> Taka {
        self.cart.iter().map(LineItem::subtotal).sum()
    }
}

/// Reply from the order endpoint, on success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReply {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;
    use crate::ids::ProductId;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Rahim".to_string(),
            phone: "01700000000".to_string(),
            email: String::new(),
            address: "Dhaka".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(form().validate().is_ok());

        let mut incomplete = form();
        incomplete.phone = "  ".to_string();
        incomplete.address.clear();
        match incomplete.validate() {
            Err(CommerceError::CheckoutIncomplete(fields)) => assert_eq!(fields, "phone, address"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_reset() {
        let mut f = form();
        f.reset();
        assert_eq!(f, CheckoutForm::default());
    }

    #[test]
    fn test_request_payload_shape() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), Localized::new("Rice", "চাল"), Taka::new(50), 3)
            .unwrap();
        let request = OrderRequest::new(&form(), &cart);
        assert_eq!(request.total(), Taka::new(150));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Rahim");
        assert_eq!(json["email"], "");
        assert_eq!(json["cart"][0]["id"], "p1");
        assert_eq!(json["cart"][0]["name"]["bn"], "চাল");
        assert_eq!(json["cart"][0]["quantity"], 3);
    }
}
