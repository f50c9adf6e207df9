//! Product search tool backed by the catalog vector store

use crate::Tool;
use crate::catalog::{ProductHit, ProductVectorStore};

/// How many products a single reply lists
const TOP_K: usize = 3;

/// Searches the drinkware catalog with keyword similarity
#[derive(Debug)]
pub struct ProductSearchTool {
    store: ProductVectorStore,
}

impl ProductSearchTool {
    pub fn new(store: ProductVectorStore) -> Self {
        Self { store }
    }

    fn format_hits(hits: &[ProductHit]) -> String {
        let mut parts = vec![format!("I found {} products that match your query:\n", hits.len())];

        for (idx, hit) in hits.iter().enumerate() {
            let product = &hit.product;
            parts.push(format!("\n{}. **{}**", idx + 1, product.name));
            parts.push(format!("   - Price: RM {:.2}", product.price_myr));
            parts.push(format!("   - Capacity: {}ml", product.capacity_ml));
            parts.push(format!("   - Material: {}", product.material));

            if !product.colors.is_empty() {
                let colors = product.colors.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
                parts.push(format!("   - Colors: {}", colors));
            }

            if !product.description.is_empty() {
                let description = if product.description.len() > 100 {
                    let truncated: String = product.description.chars().take(100).collect();
                    format!("{}...", truncated)
                } else {
                    product.description.clone()
                };
                parts.push(format!("   - Description: {}", description));
            }

            if !product.in_stock {
                parts.push("   - **Currently out of stock**".to_string());
            }
        }

        parts.join("\n")
    }
}

impl Tool for ProductSearchTool {
    fn name(&self) -> &str {
        "product_search"
    }

    fn description(&self) -> &str {
        "Useful for finding drinkware products like tumblers, bottles, mugs, and cups. \
         Use this when users ask about products, prices, features, or what's available to buy."
    }

    fn run(&self, query: &str) -> String {
        let hits = self.store.search(query, TOP_K);

        if hits.is_empty() {
            return "I couldn't find any products matching your query. We have tumblers, \
                    bottles, mugs, and other drinkware available."
                .to_string();
        }

        Self::format_hits(&hits)
    }
}
