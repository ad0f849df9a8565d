//! Customer details collected at checkout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Online payment.
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::Online => "online",
        }
    }

    /// Label used in the order message.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "💵 Pago contra entrega (Efectivo)",
            PaymentMethod::BankTransfer => "🏦 Transferencia bancaria",
            PaymentMethod::Online => "💳 PSE (Pago en línea)",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    /// Accepts the canonical names plus the storefront's form values
    /// (`efectivo`, `transferencia`, `pse`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" | "efectivo" => Ok(PaymentMethod::Cash),
            "bank-transfer" | "bank_transfer" | "transfer" | "transferencia" => {
                Ok(PaymentMethod::BankTransfer)
            }
            "online" | "pse" => Ok(PaymentMethod::Online),
            _ => Err(CommerceError::InvalidPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer details for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub comments: Option<String>,
}

impl CustomerInfo {
    /// Check the required fields, in form order.
    ///
    /// The first blank one is reported as [`CommerceError::MissingField`].
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("city", &self.city),
            ("address", &self.address),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CommerceError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Email, if given and not blank.
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Comments, if given and not blank.
    pub fn comments(&self) -> Option<&str> {
        non_blank(self.comments.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
