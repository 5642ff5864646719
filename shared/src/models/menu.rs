//! Menu Model

use serde::{Deserialize, Serialize};

/// A single menu entry (immutable, defined at build time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Display price with currency, e.g. "12€"
    pub price: String,
    pub image_url: String,
    /// Labels like "vegan" or "best-seller"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Named, ordered group of menu items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}
