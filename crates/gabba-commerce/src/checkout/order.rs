//! Order summary text and the messaging hand-off.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::cart::{CartLine, CartTotals};
use crate::checkout::CustomerInfo;
use crate::config::StoreConfig;
use crate::error::CommerceError;

/// Base of the messaging deep link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// A composed order, ready to be handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Message body.
    pub text: String,
    /// Totals the text was built from.
    pub totals: CartTotals,
    /// Recipient of the deep link.
    pub recipient: String,
}

impl OrderSummary {
    /// Build the order message.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there are no lines, or
    /// [`CommerceError::Overflow`] if a line total does not fit.
    pub fn compose(
        lines: &[CartLine],
        totals: &CartTotals,
        customer: &CustomerInfo,
        config: &StoreConfig,
        placed_at: NaiveDateTime,
    ) -> Result<Self, CommerceError> {
        if lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        // Writing to a String cannot fail.
        let mut text = String::new();
        let _ = writeln!(text, "🛍️ *NUEVO PEDIDO - {}*", config.store_name);
        text.push('\n');

        let _ = writeln!(text, "👤 *Cliente:* {}", customer.name.trim());
        let _ = writeln!(text, "📱 *Teléfono:* {}", customer.phone.trim());
        if let Some(email) = customer.email() {
            let _ = writeln!(text, "📧 *Email:* {email}");
        }
        let _ = writeln!(text, "🏠 *Ciudad:* {}", customer.city.trim());
        let _ = writeln!(text, "📍 *Dirección:* {}", customer.address.trim());
        text.push('\n');

        text.push_str("🛒 *PRODUCTOS:*\n");
        for line in lines {
            let line_total = line.line_total().ok_or(CommerceError::Overflow)?;
            let _ = writeln!(text, "• *{}*", line.name);
            let _ = writeln!(text, "  Cantidad: {}", line.quantity);
            let _ = writeln!(text, "  Precio unitario: {}", line.unit_price);
            let _ = writeln!(text, "  Subtotal: {line_total}");
            text.push('\n');
        }

        text.push_str("💰 *RESUMEN DEL PEDIDO:*\n");
        let _ = writeln!(text, "Subtotal productos: {}", totals.subtotal);
        let _ = writeln!(text, "Costo de envío: {}", totals.shipping);
        let _ = writeln!(text, "*TOTAL A PAGAR: {}*", totals.total);
        text.push('\n');

        let _ = writeln!(text, "{}", customer.payment_method.label());

        if let Some(comments) = customer.comments() {
            let _ = write!(text, "\n📝 *Comentarios adicionales:*\n{comments}");
        }

        let _ = write!(
            text,
            "\n\n⏰ *Fecha del pedido:* {}",
            placed_at.format("%d/%m/%Y, %H:%M:%S")
        );

        Ok(Self {
            text,
            totals: *totals,
            recipient: config.whatsapp_recipient.clone(),
        })
    }

    /// Deep link that opens a chat with the text pre-filled.
    pub fn deep_link(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.recipient,
            urlencoding::encode(&self.text)
        )
    }

    /// Like [`deep_link`](Self::deep_link), but fails with
    /// [`CommerceError::HandoffFailed`] when no recipient is configured.
    pub fn checked_deep_link(&self) -> Result<String, CommerceError> {
        if self.recipient.trim().is_empty() {
            return Err(CommerceError::HandoffFailed(
                "no order recipient configured".to_string(),
            ));
        }
        Ok(self.deep_link())
    }
}

/// Passes a finished order's deep link to the outside world.
///
/// Implementations report delivery problems as
/// [`CommerceError::HandoffFailed`].
pub trait OrderHandoff {
    fn hand_off(&mut self, summary: &OrderSummary) -> Result<(), CommerceError>;
}
