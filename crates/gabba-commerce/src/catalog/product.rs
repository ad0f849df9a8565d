//! Static catalog products.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Gender tag that matches every gender filter.
const UNISEX: &str = "unisex";

/// A product on the storefront grid.
///
/// Attributes other than name and price are optional; how a missing one
/// affects filtering is defined by [`ProductFilter`](crate::search::ProductFilter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Short description, searched alongside the name.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Category (e.g. "adults", "kids").
    #[serde(default)]
    pub category: Option<String>,
    /// Available sizes. Empty means sizes are not tracked.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Age bracket.
    #[serde(default)]
    pub age: Option<String>,
    /// Gender tag, or `"unisex"`.
    #[serde(default)]
    pub gender: Option<String>,
}

impl Product {
    /// Create a product with only a name and price.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: None,
            sizes: Vec::new(),
            age: None,
            gender: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the available sizes.
    pub fn with_sizes<I, T>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the age bracket.
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Set the gender tag.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Check if the product is tagged unisex.
    pub fn is_unisex(&self) -> bool {
        self.gender
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case(UNISEX))
    }
}

/// The full product grid, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON catalog document: `{"products": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        serde_json::from_str(json).map_err(|e| CommerceError::CatalogParse(e.to_string()))
    }

    /// Find a product by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
