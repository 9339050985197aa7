use crate::models::Item;
use serde::{Deserialize, Serialize};

/// Fields a client may supply when creating an item.
///
/// All optional. The identifier and timestamps are owned by the storage
/// layer and cannot be supplied; unknown body fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub co2: Option<String>,
}

/// The external representation of an item: the stored record with the
/// internal `_id` replaced by a plain `id` string.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub co2: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            co2: item.co2,
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.to_rfc3339(),
        }
    }
}
