use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{
    destination::Destination,
    preference::TravelPreferenceDto,
    travel_plan::{NewTravelPlan, PlanChildren, PlanUpdate, TravelPlan, TravelPlanRecord},
    user::{NewUser, TravelPreferenceRecord, User},
};
use crate::services::reference_data::ReferenceData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
    #[error("Inconsistent store state: {0}")]
    Inconsistent(String),
}

/// Persistence for reference data, plans, users and their preferences.
///
/// Ids are integers handed out by the store. Deleting a plan removes its
/// activity, accommodation and transportation rows; deleting a user removes
/// their preferences and plans as well.
#[async_trait]
pub trait TravelStore {
    /// Upsert continents and destinations. Safe to run on every start.
    async fn seed_reference_data(&self, reference: &ReferenceData) -> Result<(), StoreError>;

    /// All destinations, optionally narrowed to names starting with `search`.
    async fn list_destinations(&self, search: Option<&str>) -> Result<Vec<Destination>, StoreError>;
    async fn get_destination(&self, id: i32) -> Result<Option<Destination>, StoreError>;
    /// Most popular first.
    async fn destinations_by_continent(&self, continent_id: i32) -> Result<Vec<Destination>, StoreError>;

    async fn insert_plan(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, StoreError>;
    async fn get_plan(&self, id: i64) -> Result<Option<TravelPlan>, StoreError>;
    /// Newest first.
    async fn plans_for_user(&self, user_id: i64) -> Result<Vec<TravelPlan>, StoreError>;
    async fn update_plan(&self, id: i64, update: PlanUpdate) -> Result<Option<TravelPlan>, StoreError>;
    async fn delete_plan(&self, id: i64) -> Result<bool, StoreError>;
    async fn plan_children(&self, plan_id: i64) -> Result<PlanChildren, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError>;
    async fn delete_user(&self, id: i64) -> Result<bool, StoreError>;

    async fn insert_preference(
        &self,
        user_id: i64,
        preferences: TravelPreferenceDto,
    ) -> Result<TravelPreferenceRecord, StoreError>;
    async fn preferences_for_user(&self, user_id: i64) -> Result<Vec<TravelPreferenceRecord>, StoreError>;
}

pub type DynStore = Arc<dyn TravelStore + Send + Sync>;

/// Row for a plan about to be saved. The generated plan is kept whole,
/// minus its id, so it can be merged back with the row on reads.
pub fn plan_record(id: i64, new_plan: &NewTravelPlan, now: DateTime<Utc>) -> TravelPlanRecord {
    let mut embedded = new_plan.plan.clone();
    embedded.id = None;

    TravelPlanRecord {
        id,
        user_id: new_plan.user_id,
        travel_preference_id: new_plan.travel_preference_id,
        destination_id: new_plan.plan.destination.as_ref().map(|d| d.id),
        title: new_plan.title.clone(),
        total_budget: new_plan.plan.total_budget,
        start_date: new_plan.plan.start_date,
        end_date: new_plan.plan.end_date,
        status: new_plan.plan.status,
        ai_generated_plan: Some(embedded),
        created_at: now,
        updated_at: now,
    }
}
