//! Cart commands.

use anyhow::{anyhow, Context as _, Result};
use dialoguer::Confirm;
use gabba_commerce::cart::QuantityChange;
use gabba_commerce::Money;

use super::{CartArgs, CartCommand};
use crate::context::{Context, Session};
use crate::output::badge;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.open_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => return show_cart(&session, ctx),
        CartCommand::Add {
            name,
            price,
            image,
            category,
            catalog,
        } => add_item(&mut session, ctx, &name, price, image, category, catalog)?,
        CartCommand::Remove { index } => {
            session.store.remove_item(index)?;
        }
        CartCommand::Change { index, delta } => {
            match session.store.change_quantity(index, delta)? {
                QuantityChange::Updated(quantity) => ctx
                    .output
                    .debug(&format!("Line {index} now has quantity {quantity}")),
                QuantityChange::Removed(_) => {}
            }
        }
        CartCommand::Set { index, quantity } => {
            if !session.store.set_quantity_input(index, &quantity)? {
                ctx.output
                    .warn(&format!("Ignored quantity '{quantity}'; it must be a positive number"));
            }
        }
        CartCommand::Clear { yes } => {
            if session.store.is_empty() {
                ctx.output.info("Cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let prompt = format!(
                    "Remove all {} items from the cart?",
                    session.store.item_count()
                );
                let confirmed = Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Clear cancelled");
                    return Ok(());
                }
            }
            session.store.clear();
            ctx.output.success("Cart cleared");
        }
    }

    if ctx.output.is_json() {
        return show_cart(&session, ctx);
    }
    ctx.output.text(&badge(&session.badge_text()));
    Ok(())
}

fn add_item(
    session: &mut Session,
    ctx: &Context,
    name: &str,
    price: Option<u64>,
    image: Option<String>,
    category: Option<String>,
    catalog: Option<String>,
) -> Result<()> {
    let (unit_price, image, category) = match price {
        Some(price) => (Money::new(price), image.unwrap_or_default(), category),
        None => {
            let catalog = ctx
                .load_catalog(catalog.as_deref())
                .context("No price given and the catalog could not be loaded")?;
            let product = catalog
                .find(name)
                .ok_or_else(|| anyhow!("Product '{}' is not in the catalog; pass a price", name))?;
            (
                product.price,
                image.unwrap_or_else(|| product.image.clone()),
                category.or_else(|| product.category.clone()),
            )
        }
    };

    let id = session
        .store
        .add_item(name, unit_price, &image, category.as_deref())?;
    ctx.output.debug(&format!("Line id {id}"));
    Ok(())
}

fn show_cart(session: &Session, ctx: &Context) -> Result<()> {
    let store = &session.store;
    let totals = store.compute_totals()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "lines": store.lines(),
            "totals": totals,
            "badge": session.badge_text(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Carrito {}", session.badge_text()));

    if store.is_empty() {
        ctx.output.info("Tu carrito está vacío");
    } else {
        let widths = [3, 28, 12, 5, 14];
        ctx.output
            .table_row(&["#", "Producto", "Precio", "Cant", "Subtotal"], &widths);
        for (index, line) in store.lines().iter().enumerate() {
            let line_total = line
                .line_total()
                .map(|m| m.display())
                .unwrap_or_else(|| "-".to_string());
            ctx.output.table_row(
                &[
                    &index.to_string(),
                    &line.name,
                    &line.unit_price.display(),
                    &line.quantity.to_string(),
                    &line_total,
                ],
                &widths,
            );
        }
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    ctx.output.kv("Envío", &totals.shipping.display());
    ctx.output.kv("Total", &totals.total.display());

    Ok(())
}
