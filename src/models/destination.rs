use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::preference::{AgeRange, BudgetLevel, Gender};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Continent {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub code: String,
}

/// Destination row as stored in the `Destinations` collection.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationRecord {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub country: String,
    pub continent_id: i32,
    pub description: Option<String>,
    pub popularity_score: i32,
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Destination as returned over the API, with the continent name resolved.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub continent_name: String,
    pub description: Option<String>,
    pub popularity_score: i32,
    pub image_url: Option<String>,
}

impl DestinationRecord {
    pub fn into_destination(self, continent_name: &str) -> Destination {
        Destination {
            id: self.id,
            name: self.name,
            country: self.country,
            continent_name: continent_name.to_string(),
            description: self.description,
            popularity_score: self.popularity_score,
            image_url: self.image_url,
        }
    }
}

/// Catalog entry used by the scored recommender.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppealDestination {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub popularity_score: i32,
    pub budget_level: BudgetLevel,
    pub age_appeal: Vec<AgeRange>,
    pub gender_appeal: Vec<Gender>,
    pub continent_code: String,
}
