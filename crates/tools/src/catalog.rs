//! Drinkware product catalog with vector search
//!
//! Loads products from a JSON file (or the embedded sample set), builds
//! TF-IDF vectors over their searchable text, and answers top-k similarity
//! queries for the product search tool.

use serde::{Deserialize, Serialize};
use std::path::Path;

use brewchat_core::{Error, Result};

use crate::embedder::SimpleEmbedder;

/// A drinkware product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub material: String,
    pub capacity_ml: u32,
    pub price_myr: f64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// A product with its query similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct ProductHit {
    pub product: Product,
    pub score: f64,
}

/// Vector store over the product catalog
#[derive(Debug)]
pub struct ProductVectorStore {
    embedder: SimpleEmbedder,
    products: Vec<Product>,
    vectors: Vec<Vec<f64>>,
}

impl ProductVectorStore {
    /// Build a store from an in-memory product list
    pub fn from_products(products: Vec<Product>) -> Self {
        let texts: Vec<String> = products.iter().map(searchable_text).collect();

        let mut embedder = SimpleEmbedder::new();
        embedder.fit(&texts);
        let vectors = texts.iter().map(|text| embedder.embed(text)).collect();

        tracing::debug!(count = products.len(), "product catalog indexed");
        Self { embedder, products, vectors }
    }

    /// Load a catalog from a JSON file and index it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("products file {}: {}", path.display(), e)))?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        Ok(Self::from_products(products))
    }

    /// Search for products matching the query, best first
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ProductHit> {
        if self.products.is_empty() {
            return Vec::new();
        }

        let query_vector = self.embedder.embed(query);

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, vector)| (idx, self.embedder.similarity(&query_vector, vector)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(top_k)
            .map(|(idx, score)| ProductHit { product: self.products[idx].clone(), score })
            .collect()
    }

    /// All products in catalog order
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn by_id(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

/// Combine the fields a shopper would search on into one document
fn searchable_text(product: &Product) -> String {
    [
        product.name.as_str(),
        product.description.as_str(),
        product.category.as_str(),
        product.subcategory.as_str(),
        product.material.as_str(),
        &product.features.join(" "),
        &product.colors.join(" "),
    ]
    .join(" ")
}

fn product(
    id: &str, name: &str, description: &str, material: &str, capacity_ml: u32, price_myr: f64, colors: &[&str],
    features: &[&str], in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: "Drinkware".to_string(),
        subcategory: String::new(),
        material: material.to_string(),
        capacity_ml,
        price_myr,
        colors: colors.iter().map(|c| c.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        in_stock,
    }
}

/// The embedded sample catalog, used when no products file is configured
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "DW-001",
            "All Day Tumbler",
            "Double wall insulated tumbler that keeps drinks cold for 12 hours and hot for 6. \
             Fits most car cup holders.",
            "Stainless Steel",
            500,
            79.0,
            &["Black", "Cream", "Sage Green", "Midnight Blue"],
            &["Double wall insulation", "Leak-proof lid", "Cup holder friendly"],
            true,
        ),
        product(
            "DW-002",
            "Frosted Glass Cup",
            "Frosted borosilicate glass cup with a bamboo lid for hot and iced drinks.",
            "Borosilicate Glass",
            360,
            49.0,
            &["Frost White", "Amber"],
            &["Heat resistant", "Bamboo lid"],
            true,
        ),
        product(
            "DW-003",
            "Commuter Bottle",
            "Slim stainless steel bottle with a one-hand flip cap, built for the daily commute.",
            "Stainless Steel",
            650,
            95.0,
            &["Black", "Silver", "Burgundy"],
            &["One-hand flip cap", "Vacuum insulated", "Fits bag side pocket"],
            true,
        ),
        product(
            "DW-004",
            "Ceramic Mug Classic",
            "Thick-walled ceramic mug with a matte glaze finish for slow mornings.",
            "Ceramic",
            340,
            39.0,
            &["Matte Black", "Oat", "Terracotta"],
            &["Dishwasher safe", "Microwave safe"],
            true,
        ),
        product(
            "DW-005",
            "Cold Brew Carafe",
            "Glass carafe with a stainless steel mesh filter for overnight cold brew.",
            "Glass",
            1000,
            129.0,
            &["Clear"],
            &["Mesh filter included", "Airtight seal"],
            false,
        ),
        product(
            "DW-006",
            "Mini Espresso Cup Set",
            "Set of two double wall espresso cups that keep shots warm without burning fingers.",
            "Borosilicate Glass",
            80,
            59.0,
            &["Clear"],
            &["Double wall", "Set of 2"],
            true,
        ),
        product(
            "DW-007",
            "Trail Flask",
            "Rugged powder-coated flask with a carabiner lid loop for hikes and long drives.",
            "Stainless Steel",
            750,
            115.0,
            &["Forest Green", "Slate Grey"],
            &["Powder coated", "Carabiner loop", "Vacuum insulated"],
            true,
        ),
        product(
            "DW-008",
            "Straw Lid Tumbler",
            "Tall tumbler with a removable straw lid and measurement markings for hydration goals.",
            "BPA-free Plastic",
            900,
            69.0,
            &["Lilac", "Sky Blue", "Black"],
            &["Removable straw lid", "Measurement markings"],
            true,
        ),
    ]
}
