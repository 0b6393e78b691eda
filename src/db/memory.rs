use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::db::store::{plan_record, StoreError, TravelStore};
use crate::models::{
    destination::{Continent, Destination, DestinationRecord},
    preference::TravelPreferenceDto,
    travel_plan::{
        NewTravelPlan, PlanAccommodationRecord, PlanActivityRecord, PlanChildren,
        PlanTransportationRecord, PlanUpdate, TravelPlan, TravelPlanRecord,
    },
    user::{NewUser, TravelPreferenceRecord, User},
};
use crate::services::reference_data::ReferenceData;

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    continents: BTreeMap<i32, Continent>,
    destinations: BTreeMap<i32, DestinationRecord>,
    users: BTreeMap<i64, User>,
    preferences: BTreeMap<i64, TravelPreferenceRecord>,
    plans: BTreeMap<i64, TravelPlanRecord>,
    plan_activities: BTreeMap<i64, PlanActivityRecord>,
    plan_accommodations: BTreeMap<i64, PlanAccommodationRecord>,
    plan_transportation: BTreeMap<i64, PlanTransportationRecord>,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn destination(&self, id: i32) -> Option<Destination> {
        self.destinations.get(&id).cloned().map(|record| {
            let continent = self
                .continents
                .get(&record.continent_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            record.into_destination(&continent)
        })
    }

    fn plan(&self, record: &TravelPlanRecord) -> TravelPlan {
        record.to_plan(record.destination_id.and_then(|id| self.destination(id)))
    }

    fn remove_plan_children(&mut self, plan_id: i64) {
        self.plan_activities.retain(|_, row| row.travel_plan_id != plan_id);
        self.plan_accommodations.retain(|_, row| row.travel_plan_id != plan_id);
        self.plan_transportation.retain(|_, row| row.travel_plan_id != plan_id);
    }
}

/// Store kept in process memory. Used by tests and when no database is
/// configured; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn seed_reference_data(&self, reference: &ReferenceData) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        for continent in &reference.continents {
            state.continents.insert(continent.id, continent.clone());
        }
        for destination in &reference.destinations {
            state.destinations.insert(destination.id, destination.clone());
        }
        Ok(())
    }

    async fn list_destinations(&self, search: Option<&str>) -> Result<Vec<Destination>, StoreError> {
        let state = self.state.read().await;
        let prefix = search.map(|s| s.trim().to_lowercase());
        Ok(state
            .destinations
            .values()
            .filter(|d| {
                prefix
                    .as_deref()
                    .map_or(true, |p| d.name.to_lowercase().starts_with(p))
            })
            .filter_map(|d| state.destination(d.id))
            .collect())
    }

    async fn get_destination(&self, id: i32) -> Result<Option<Destination>, StoreError> {
        Ok(self.state.read().await.destination(id))
    }

    async fn destinations_by_continent(&self, continent_id: i32) -> Result<Vec<Destination>, StoreError> {
        let state = self.state.read().await;
        let mut destinations: Vec<Destination> = state
            .destinations
            .values()
            .filter(|d| d.continent_id == continent_id)
            .filter_map(|d| state.destination(d.id))
            .collect();
        destinations.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
        Ok(destinations)
    }

    async fn insert_plan(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, StoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = plan_record(id, &new_plan, Utc::now());
        let children = PlanChildren::itemize(id, &new_plan.plan, || state.next_id());

        for row in children.activities {
            state.plan_activities.insert(row.id, row);
        }
        if let Some(row) = children.accommodation {
            state.plan_accommodations.insert(row.id, row);
        }
        if let Some(row) = children.transportation {
            state.plan_transportation.insert(row.id, row);
        }

        let plan = state.plan(&record);
        state.plans.insert(id, record);
        Ok(plan)
    }

    async fn get_plan(&self, id: i64) -> Result<Option<TravelPlan>, StoreError> {
        let state = self.state.read().await;
        Ok(state.plans.get(&id).map(|record| state.plan(record)))
    }

    async fn plans_for_user(&self, user_id: i64) -> Result<Vec<TravelPlan>, StoreError> {
        let state = self.state.read().await;
        let mut records: Vec<&TravelPlanRecord> = state
            .plans
            .values()
            .filter(|record| record.user_id == user_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records.into_iter().map(|record| state.plan(record)).collect())
    }

    async fn update_plan(&self, id: i64, update: PlanUpdate) -> Result<Option<TravelPlan>, StoreError> {
        let mut state = self.state.write().await;
        let Some(mut record) = state.plans.get(&id).cloned() else {
            return Ok(None);
        };
        record.apply(&update, Utc::now());
        let plan = state.plan(&record);
        state.plans.insert(id, record);
        Ok(Some(plan))
    }

    async fn delete_plan(&self, id: i64) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if state.plans.remove(&id).is_none() {
            return Ok(false);
        }
        state.remove_plan_children(id);
        Ok(true)
    }

    async fn plan_children(&self, plan_id: i64) -> Result<PlanChildren, StoreError> {
        let state = self.state.read().await;
        Ok(PlanChildren {
            activities: state
                .plan_activities
                .values()
                .filter(|row| row.travel_plan_id == plan_id)
                .cloned()
                .collect(),
            accommodation: state
                .plan_accommodations
                .values()
                .find(|row| row.travel_plan_id == plan_id)
                .cloned(),
            transportation: state
                .plan_transportation
                .values()
                .find(|row| row.travel_plan_id == plan_id)
                .cloned(),
        })
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        let user = User {
            id: state.next_id(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn delete_user(&self, id: i64) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_none() {
            return Ok(false);
        }

        state.preferences.retain(|_, row| row.user_id != id);
        let plan_ids: Vec<i64> = state
            .plans
            .values()
            .filter(|record| record.user_id == id)
            .map(|record| record.id)
            .collect();
        for plan_id in plan_ids {
            state.plans.remove(&plan_id);
            state.remove_plan_children(plan_id);
        }
        Ok(true)
    }

    async fn insert_preference(
        &self,
        user_id: i64,
        preferences: TravelPreferenceDto,
    ) -> Result<TravelPreferenceRecord, StoreError> {
        let mut state = self.state.write().await;
        let record = TravelPreferenceRecord {
            id: state.next_id(),
            user_id,
            preferences,
            created_at: Utc::now(),
        };
        state.preferences.insert(record.id, record.clone());
        Ok(record)
    }

    async fn preferences_for_user(&self, user_id: i64) -> Result<Vec<TravelPreferenceRecord>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .preferences
            .values()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }
}
