//! Attribute filters and free-text search.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::FilterOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive price range, written `"min-max"`.
///
/// An empty upper bound (`"200000-"`) leaves the range open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(min: Money, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// Check if `price` lies within the range, bounds included.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::InvalidPriceRange(s.to_string());

        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;
        let min: u64 = min.trim().parse().map_err(|_| invalid())?;
        let max = match max.trim() {
            "" => None,
            max => Some(max.parse::<u64>().map_err(|_| invalid())?),
        };

        if max.is_some_and(|max| max < min) {
            return Err(invalid());
        }

        Ok(Self::new(Money::new(min), max.map(Money::new)))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min.amount(), max.amount()),
            None => write!(f, "{}-", self.min.amount()),
        }
    }
}

/// Attribute filter over the catalog grid.
///
/// Every criterion left as `None` matches all products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub price: Option<PriceRange>,
    pub size: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Check if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.price.is_none()
            && self.size.is_none()
            && self.age.is_none()
            && self.gender.is_none()
    }

    /// Check if `product` passes every set criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(range) = &self.price {
            if !range.contains(product.price) {
                return false;
            }
        }

        // Products that do not track sizes come in every size.
        if let Some(size) = &self.size {
            if !product.sizes.is_empty() && !product.sizes.iter().any(|s| s == size) {
                return false;
            }
        }

        if let Some(age) = &self.age {
            if product.age.as_deref() != Some(age.as_str()) {
                return false;
            }
        }

        if let Some(gender) = &self.gender {
            if product.gender.as_deref() != Some(gender.as_str()) && !product.is_unisex() {
                return false;
            }
        }

        true
    }

    /// Keep the matching products, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> FilterOutcome<'a> {
        let visible = products.iter().filter(|p| self.matches(p)).collect();
        FilterOutcome::new(visible, products.len())
    }
}

/// Free-text search over names and descriptions.
///
/// The term is trimmed and compared case-insensitively. A blank term
/// matches every product.
pub fn search<'a>(products: &'a [Product], term: &str) -> FilterOutcome<'a> {
    let term = term.trim().to_lowercase();
    let visible = products
        .iter()
        .filter(|p| matches_term(p, &term))
        .collect();
    FilterOutcome::new(visible, products.len())
}

/// Check one product against a search term already trimmed and lowercased.
pub fn matches_term(product: &Product, term: &str) -> bool {
    term.is_empty()
        || product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<Product> {
        vec![
            Product::new("Hoodie Oversize", Money::new(80000))
                .with_description("Buzo en algodón perchado")
                .with_category("adults")
                .with_sizes(["S", "M", "L"])
                .with_age("adult")
                .with_gender("female"),
            Product::new("Gorra", Money::new(30000))
                .with_category("adults")
                .with_gender("unisex"),
            Product::new("Camiseta Niño", Money::new(45000))
                .with_description("Estampado de dinosaurio")
                .with_category("kids")
                .with_sizes(["6", "8", "10"])
                .with_age("kids")
                .with_gender("male"),
            Product::new("Medias", Money::new(12000)),
        ]
    }

    fn names<'a>(outcome: &FilterOutcome<'a>) -> Vec<&'a str> {
        outcome.visible.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_price_range_parsing() {
        let range: PriceRange = "20000-50000".parse().unwrap();
        assert_eq!(range, PriceRange::new(Money::new(20000), Some(Money::new(50000))));

        let open: PriceRange = "100000-".parse().unwrap();
        assert_eq!(open.max, None);
        assert_eq!(open.to_string(), "100000-");

        assert!("cheap".parse::<PriceRange>().is_err());
        assert!("50000-20000".parse::<PriceRange>().is_err());
        assert!("-5".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range: PriceRange = "30000-80000".parse().unwrap();
        assert!(range.contains(Money::new(30000)));
        assert!(range.contains(Money::new(80000)));
        assert!(!range.contains(Money::new(80001)));
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        let products = grid();
        let outcome = ProductFilter::new().apply(&products);
        assert_eq!(outcome.len(), 4);
        assert_eq!(outcome.hidden_count(), 0);
    }

    #[test]
    fn test_missing_category_is_hidden() {
        let products = grid();
        let outcome = ProductFilter::new().category("adults").apply(&products);
        assert_eq!(names(&outcome), vec!["Hoodie Oversize", "Gorra"]);
    }

    #[test]
    fn test_size_only_hides_products_with_sizes() {
        let products = grid();
        let outcome = ProductFilter::new().size("M").apply(&products);
        assert_eq!(names(&outcome), vec!["Hoodie Oversize", "Gorra", "Medias"]);
    }

    #[test]
    fn test_unisex_matches_any_gender() {
        let products = grid();
        let outcome = ProductFilter::new().gender("male").apply(&products);
        assert_eq!(names(&outcome), vec!["Gorra", "Camiseta Niño"]);
    }

    #[test]
    fn test_criteria_combine() {
        let products = grid();
        let outcome = ProductFilter::new()
            .category("adults")
            .price("0-50000".parse().unwrap())
            .apply(&products);
        assert_eq!(names(&outcome), vec!["Gorra"]);

        let outcome = ProductFilter::new().age("kids").gender("female").apply(&products);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_search_name_and_description() {
        let products = grid();
        assert_eq!(names(&search(&products, "  GORRA ")), vec!["Gorra"]);
        assert_eq!(names(&search(&products, "dinosaurio")), vec!["Camiseta Niño"]);
        assert!(search(&products, "zapatos").is_empty());
    }

    #[test]
    fn test_matches_term_combines_with_filter() {
        let products = grid();
        let filter = ProductFilter::new().category("adults");
        let hits: Vec<&str> = products
            .iter()
            .filter(|p| filter.matches(p) && matches_term(p, "algodón"))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Hoodie Oversize"]);
        assert!(matches_term(&products[3], ""));
    }

    #[test]
    fn test_blank_search_matches_all() {
        let products = grid();
        assert_eq!(search(&products, "   ").len(), 4);
    }
}
