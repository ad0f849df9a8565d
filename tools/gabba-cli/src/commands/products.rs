//! Catalog listing with filters and search.

use anyhow::Result;
use gabba_commerce::search::{matches_term, FilterOutcome, PriceRange, ProductFilter};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    let mut filter = ProductFilter::new();
    filter.category = args.category;
    filter.price = args.price.as_deref().map(str::parse::<PriceRange>).transpose()?;
    filter.size = args.size;
    filter.age = args.age;
    filter.gender = args.gender;

    let term = args.search.as_deref().map(|t| t.trim().to_lowercase());
    let visible = catalog
        .products
        .iter()
        .filter(|p| filter.matches(p) && term.as_deref().map_or(true, |t| matches_term(p, t)))
        .collect();
    let outcome = FilterOutcome::new(visible, catalog.products.len());

    if ctx.output.is_json() {
        ctx.output.json(&outcome.visible);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Productos ({} de {})",
        outcome.len(),
        outcome.total
    ));

    if outcome.is_empty() {
        ctx.output.warn("No se encontraron productos");
        return Ok(());
    }

    let widths = [28, 12, 10, 12];
    ctx.output
        .table_row(&["Producto", "Precio", "Categoría", "Tallas"], &widths);
    for product in outcome.iter() {
        ctx.output.table_row(
            &[
                &product.name,
                &product.price.display(),
                product.category.as_deref().unwrap_or("-"),
                &product.sizes.join(","),
            ],
            &widths,
        );
    }

    if !filter.is_empty() || args.search.is_some() {
        ctx.output
            .debug(&format!("{} hidden by filters", outcome.hidden_count()));
    }

    Ok(())
}
