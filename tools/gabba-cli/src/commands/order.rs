//! Order command: compose the order message and hand off its deep link.

use anyhow::Result;
use chrono::Local;
use gabba_commerce::checkout::{CustomerInfo, OrderHandoff, OrderSummary, PaymentMethod};
use gabba_commerce::CommerceError;

use super::OrderArgs;
use crate::context::Context;
use crate::output::Output;

/// Prints the order and its deep link instead of opening a browser.
///
/// Fails with [`CommerceError::HandoffFailed`] when no recipient is configured.
struct PrintHandoff<'a> {
    output: &'a Output,
}

impl OrderHandoff for PrintHandoff<'_> {
    fn hand_off(&mut self, summary: &OrderSummary) -> Result<(), CommerceError> {
        let link = summary.checked_deep_link()?;

        if self.output.is_json() {
            self.output.json(&serde_json::json!({
                "text": summary.text,
                "totals": summary.totals,
                "link": link,
            }));
            return Ok(());
        }

        self.output.header("Pedido");
        self.output.text(&summary.text);
        self.output.info("");
        self.output.info("Abre este enlace para enviar el pedido:");
        self.output.text(&link);
        Ok(())
    }
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let payment_method: PaymentMethod = args.payment.parse()?;
    let customer = CustomerInfo {
        name: args.name,
        phone: args.phone,
        email: args.email,
        city: args.city,
        address: args.address,
        payment_method,
        comments: args.comments,
    };

    let mut session = ctx.open_store()?;
    let summary = session
        .store
        .checkout(&customer, Local::now().naive_local())?;

    tracing::info!(
        total = summary.totals.total.amount(),
        items = summary.totals.item_count,
        "order composed"
    );

    PrintHandoff {
        output: &ctx.output,
    }
    .hand_off(&summary)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gabba_cache::MemoryStore;
    use gabba_commerce::{CartStore, Money, StoreConfig};

    fn summary(config: StoreConfig) -> OrderSummary {
        let mut store = CartStore::open(MemoryStore::new(), config);
        store.add_item("Gorra", Money::new(30000), "", None).unwrap();

        let customer = CustomerInfo {
            name: "Ana Gómez".to_string(),
            phone: "3001234567".to_string(),
            email: None,
            city: "Medellín".to_string(),
            address: "Calle 10 # 43-12".to_string(),
            payment_method: PaymentMethod::Cash,
            comments: None,
        };
        store.checkout(&customer, Local::now().naive_local()).unwrap()
    }

    #[test]
    fn test_handoff_without_recipient_fails() {
        let output = Output::new(false, true);
        let mut config = StoreConfig::default();
        config.whatsapp_recipient = String::new();

        let result = PrintHandoff { output: &output }.hand_off(&summary(config));
        assert!(matches!(result, Err(CommerceError::HandoffFailed(_))));
    }

    #[test]
    fn test_handoff_prints_link() {
        let output = Output::new(false, true);
        let result = PrintHandoff { output: &output }.hand_off(&summary(StoreConfig::default()));
        assert!(result.is_ok());
    }
}
