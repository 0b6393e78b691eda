use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, ReturnDocument, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use std::collections::HashMap;
use std::time::Duration;

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

pub const DATABASE_NAME: &str = "TravelPlanner";

pub async fn create_mongo_client(uri: &str) -> Result<Client, mongodb::error::Error> {
    log::info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;
    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);
    client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(client_options)?;

    match client
        .database(DATABASE_NAME)
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => log::info!("Connected to MongoDB, ping succeeded"),
        Err(e) => log::warn!("Connected to MongoDB but ping failed: {}", e),
    }

    Ok(client)
}

/// [`TravelStore`] backed by one MongoDB database. Each relational table of
/// the schema maps to a collection; ids come from the `Counters` collection.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(client: &Client) -> Self {
        Self {
            db: client.database(DATABASE_NAME),
        }
    }

    fn continents(&self) -> Collection<Continent> {
        self.db.collection("Continents")
    }

    fn destinations(&self) -> Collection<DestinationRecord> {
        self.db.collection("Destinations")
    }

    fn users(&self) -> Collection<User> {
        self.db.collection("Users")
    }

    fn preferences(&self) -> Collection<TravelPreferenceRecord> {
        self.db.collection("TravelPreferences")
    }

    fn plans(&self) -> Collection<TravelPlanRecord> {
        self.db.collection("TravelPlans")
    }

    fn plan_activities(&self) -> Collection<PlanActivityRecord> {
        self.db.collection("TravelPlanActivities")
    }

    fn plan_accommodations(&self) -> Collection<PlanAccommodationRecord> {
        self.db.collection("TravelPlanAccommodations")
    }

    fn plan_transportation(&self) -> Collection<PlanTransportationRecord> {
        self.db.collection("TravelPlanTransportation")
    }

    /// Reserves `count` consecutive ids under `counter` and returns the last.
    async fn reserve_ids(&self, counter: &str, count: i64) -> Result<i64, StoreError> {
        let counters: Collection<Document> = self.db.collection("Counters");
        let updated = counters
            .find_one_and_update(doc! {"_id": counter}, doc! {"$inc": {"seq": count}})
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| StoreError::Inconsistent(format!("counter {} missing after upsert", counter)))?;

        updated
            .get_i64("seq")
            .map_err(|e| StoreError::Inconsistent(format!("counter {}: {}", counter, e)))
    }

    async fn next_id(&self, counter: &str) -> Result<i64, StoreError> {
        self.reserve_ids(counter, 1).await
    }

    async fn continent_names(&self) -> Result<HashMap<i32, String>, StoreError> {
        let continents: Vec<Continent> = self.continents().find(doc! {}).await?.try_collect().await?;
        Ok(continents.into_iter().map(|c| (c.id, c.name)).collect())
    }

    async fn resolve(&self, records: Vec<DestinationRecord>) -> Result<Vec<Destination>, StoreError> {
        let names = self.continent_names().await?;
        Ok(records
            .into_iter()
            .map(|record| {
                let continent = names.get(&record.continent_id).cloned().unwrap_or_default();
                record.into_destination(&continent)
            })
            .collect())
    }

    async fn to_plan(&self, record: &TravelPlanRecord) -> Result<TravelPlan, StoreError> {
        let destination = match record.destination_id {
            Some(id) => self.get_destination(id).await?,
            None => None,
        };
        Ok(record.to_plan(destination))
    }

    /// Children go in first and the plan row last, so a visible plan always
    /// has all of its rows.
    async fn write_plan_rows(
        &self,
        record: &TravelPlanRecord,
        new_plan: &NewTravelPlan,
    ) -> Result<(), StoreError> {
        let rows = PlanChildren::row_count(&new_plan.plan);
        if rows > 0 {
            let last = self.reserve_ids("TravelPlanChildren", rows).await?;
            let mut next = last - rows;
            let children = PlanChildren::itemize(record.id, &new_plan.plan, || {
                next += 1;
                next
            });

            if !children.activities.is_empty() {
                self.plan_activities().insert_many(&children.activities).await?;
            }
            if let Some(row) = &children.accommodation {
                self.plan_accommodations().insert_one(row).await?;
            }
            if let Some(row) = &children.transportation {
                self.plan_transportation().insert_one(row).await?;
            }
        }

        self.plans().insert_one(record).await?;
        Ok(())
    }

    async fn delete_children(&self, filter: Document) -> Result<(), StoreError> {
        self.plan_activities().delete_many(filter.clone()).await?;
        self.plan_accommodations().delete_many(filter.clone()).await?;
        self.plan_transportation().delete_many(filter).await?;
        Ok(())
    }
}

#[async_trait]
impl TravelStore for MongoStore {
    async fn seed_reference_data(&self, reference: &ReferenceData) -> Result<(), StoreError> {
        for continent in &reference.continents {
            self.continents()
                .replace_one(doc! {"_id": continent.id}, continent)
                .upsert(true)
                .await?;
        }
        for destination in &reference.destinations {
            self.destinations()
                .replace_one(doc! {"_id": destination.id}, destination)
                .upsert(true)
                .await?;
        }
        log::info!(
            "Seeded {} continents and {} destinations",
            reference.continents.len(),
            reference.destinations.len()
        );
        Ok(())
    }

    async fn list_destinations(&self, search: Option<&str>) -> Result<Vec<Destination>, StoreError> {
        let filter = match search.map(str::trim) {
            Some(text) if !text.is_empty() => doc! {
                "name": {
                    "$regex": format!("^{}", regex::escape(text)),
                    "$options": "i"
                }
            },
            _ => doc! {},
        };
        let records: Vec<DestinationRecord> = self
            .destinations()
            .find(filter)
            .sort(doc! {"_id": 1})
            .await?
            .try_collect()
            .await?;
        self.resolve(records).await
    }

    async fn get_destination(&self, id: i32) -> Result<Option<Destination>, StoreError> {
        let Some(record) = self.destinations().find_one(doc! {"_id": id}).await? else {
            return Ok(None);
        };
        let continent = self
            .continents()
            .find_one(doc! {"_id": record.continent_id})
            .await?
            .map(|c| c.name)
            .unwrap_or_default();
        Ok(Some(record.into_destination(&continent)))
    }

    async fn destinations_by_continent(&self, continent_id: i32) -> Result<Vec<Destination>, StoreError> {
        let records: Vec<DestinationRecord> = self
            .destinations()
            .find(doc! {"continent_id": continent_id})
            .sort(doc! {"popularity_score": -1, "_id": 1})
            .await?
            .try_collect()
            .await?;
        self.resolve(records).await
    }

    async fn insert_plan(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, StoreError> {
        let id = self.next_id("TravelPlans").await?;
        let record = plan_record(id, &new_plan, Utc::now());

        if let Err(e) = self.write_plan_rows(&record, &new_plan).await {
            log::error!("Saving travel plan {} failed, removing its rows: {}", id, e);
            if let Err(cleanup) = self.delete_children(doc! {"travel_plan_id": id}).await {
                log::error!("Cleanup of travel plan {} failed: {}", id, cleanup);
            }
            return Err(e);
        }

        self.to_plan(&record).await
    }

    async fn get_plan(&self, id: i64) -> Result<Option<TravelPlan>, StoreError> {
        match self.plans().find_one(doc! {"_id": id}).await? {
            Some(record) => Ok(Some(self.to_plan(&record).await?)),
            None => Ok(None),
        }
    }

    async fn plans_for_user(&self, user_id: i64) -> Result<Vec<TravelPlan>, StoreError> {
        let records: Vec<TravelPlanRecord> = self
            .plans()
            .find(doc! {"user_id": user_id})
            .sort(doc! {"created_at": -1, "_id": -1})
            .await?
            .try_collect()
            .await?;

        let mut plans = Vec::with_capacity(records.len());
        for record in &records {
            plans.push(self.to_plan(record).await?);
        }
        Ok(plans)
    }

    async fn update_plan(&self, id: i64, update: PlanUpdate) -> Result<Option<TravelPlan>, StoreError> {
        let Some(mut record) = self.plans().find_one(doc! {"_id": id}).await? else {
            return Ok(None);
        };
        record.apply(&update, Utc::now());
        self.plans().replace_one(doc! {"_id": id}, &record).await?;
        Ok(Some(self.to_plan(&record).await?))
    }

    async fn delete_plan(&self, id: i64) -> Result<bool, StoreError> {
        let result = self.plans().delete_one(doc! {"_id": id}).await?;
        if result.deleted_count == 0 {
            return Ok(false);
        }
        self.delete_children(doc! {"travel_plan_id": id}).await?;
        Ok(true)
    }

    async fn plan_children(&self, plan_id: i64) -> Result<PlanChildren, StoreError> {
        let filter = doc! {"travel_plan_id": plan_id};
        Ok(PlanChildren {
            activities: self
                .plan_activities()
                .find(filter.clone())
                .sort(doc! {"_id": 1})
                .await?
                .try_collect()
                .await?,
            accommodation: self.plan_accommodations().find_one(filter.clone()).await?,
            transportation: self.plan_transportation().find_one(filter).await?,
        })
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: self.next_id("Users").await?,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: Utc::now(),
        };
        self.users().insert_one(&user).await?;
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! {"_id": id}).await?)
    }

    async fn delete_user(&self, id: i64) -> Result<bool, StoreError> {
        let result = self.users().delete_one(doc! {"_id": id}).await?;
        if result.deleted_count == 0 {
            return Ok(false);
        }

        self.preferences().delete_many(doc! {"user_id": id}).await?;

        let plans: Vec<TravelPlanRecord> = self
            .plans()
            .find(doc! {"user_id": id})
            .await?
            .try_collect()
            .await?;
        let plan_ids: Vec<i64> = plans.iter().map(|p| p.id).collect();
        if !plan_ids.is_empty() {
            self.delete_children(doc! {"travel_plan_id": {"$in": plan_ids.clone()}})
                .await?;
            self.plans().delete_many(doc! {"user_id": id}).await?;
        }
        log::info!("Deleted user {} with {} plans", id, plan_ids.len());
        Ok(true)
    }

    async fn insert_preference(
        &self,
        user_id: i64,
        preferences: TravelPreferenceDto,
    ) -> Result<TravelPreferenceRecord, StoreError> {
        let record = TravelPreferenceRecord {
            id: self.next_id("TravelPreferences").await?,
            user_id,
            preferences,
            created_at: Utc::now(),
        };
        self.preferences().insert_one(&record).await?;
        Ok(record)
    }

    async fn preferences_for_user(&self, user_id: i64) -> Result<Vec<TravelPreferenceRecord>, StoreError> {
        Ok(self
            .preferences()
            .find(doc! {"user_id": user_id})
            .sort(doc! {"_id": 1})
            .await?
            .try_collect()
            .await?)
    }
}
