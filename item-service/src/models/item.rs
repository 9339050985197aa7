use crate::dtos::NewItem;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An item record as stored in the `items` collection.
///
/// Every attribute except the identifier and timestamps is optional; nothing
/// is required to create one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identifier. `None` until the driver inserts the
    /// record; never changes afterwards.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub co2: Option<String>,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(
        rename = "updatedAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a record ready for insertion. Both timestamps get the same
    /// instant; the identifier is left for the storage layer to assign.
    pub fn new(fields: NewItem) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image: fields.image,
            co2: fields.co2,
            created_at: now,
            updated_at: now,
        }
    }
}
