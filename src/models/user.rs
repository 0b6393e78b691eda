use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::preference::TravelPreferenceDto;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// `TravelPreferences` row. Owned by a user; removed with them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPreferenceRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: i64,
    pub preferences: TravelPreferenceDto,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
