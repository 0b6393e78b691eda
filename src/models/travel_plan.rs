use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{destination::Destination, preference::TravelPreferenceDto};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Draft,
    Saved,
    Confirmed,
    Completed,
    Cancelled,
}

impl PlanStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "draft" => Some(PlanStatus::Draft),
            "saved" => Some(PlanStatus::Saved),
            "confirmed" => Some(PlanStatus::Confirmed),
            "completed" => Some(PlanStatus::Completed),
            "cancelled" => Some(PlanStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyItinerary {
    pub day_number: u32,
    pub estimated_cost: f64,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BudgetBreakdown {
    pub accommodation: f64,
    pub transportation: f64,
    pub food: f64,
    pub activities: f64,
    pub misc: f64,
}

impl BudgetBreakdown {
    pub fn total(&self) -> f64 {
        self.accommodation + self.transportation + self.food + self.activities + self.misc
    }
}

/// A generated or persisted travel plan.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub total_budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: PlanStatus,
    pub destination: Option<Destination>,
    pub recommended_accommodation: Option<String>,
    pub recommended_transport: Option<String>,
    pub daily_itinerary: Vec<DailyItinerary>,
    pub budget_breakdown: Option<BudgetBreakdown>,
    pub travel_tips: Vec<String>,
    pub preparation_checklist: Vec<String>,
    pub places_to_visit: u32,
    pub money_saving_tips: Vec<String>,
}

fn default_user_id() -> i64 {
    1
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub preferences: TravelPreferenceDto,
    pub destination_id: Option<i32>,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SaveTravelPlanRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    pub travel_preference_id: Option<i64>,
    #[serde(default)]
    pub travel_plan: TravelPlan,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTravelPlanRequest {
    pub title: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Validated form of [`UpdateTravelPlanRequest`]. Only these fields are
/// mutable on a persisted plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanUpdate {
    pub title: Option<String>,
    pub status: Option<PlanStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Plan to be persisted, before the store allocates an id.
#[derive(Debug, Clone)]
pub struct NewTravelPlan {
    pub user_id: i64,
    pub travel_preference_id: Option<i64>,
    pub title: String,
    pub plan: TravelPlan,
}

/// `TravelPlans` row; the generated plan is embedded as a document.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlanRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: i64,
    pub travel_preference_id: Option<i64>,
    pub destination_id: Option<i32>,
    pub title: String,
    pub total_budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: PlanStatus,
    pub ai_generated_plan: Option<TravelPlan>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TravelPlanRecord {
    /// Rebuilds the API shape: stored plan content, with the row's own
    /// columns taking precedence.
    pub fn to_plan(&self, destination: Option<Destination>) -> TravelPlan {
        let mut plan = self.ai_generated_plan.clone().unwrap_or_default();
        plan.id = Some(self.id);
        plan.title = self.title.clone();
        plan.total_budget = self.total_budget;
        plan.start_date = self.start_date;
        plan.end_date = self.end_date;
        plan.status = self.status;
        if destination.is_some() {
            plan.destination = destination;
        }
        plan
    }

    pub fn apply(&mut self, update: &PlanUpdate, now: DateTime<Utc>) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.start_date.is_some() {
            self.start_date = update.start_date;
        }
        if update.end_date.is_some() {
            self.end_date = update.end_date;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlanActivityRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub travel_plan_id: i64,
    pub day_number: u32,
    pub activity_name: String,
    pub activity_type: Option<String>,
    pub description: String,
    pub estimated_cost: f64,
    pub location: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlanAccommodationRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub travel_plan_id: i64,
    pub name: String,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub cost_per_night: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlanTransportationRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub travel_plan_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub to_location: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub cost: Option<f64>,
}

/// Child rows derived from a plan when it is saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanChildren {
    pub activities: Vec<PlanActivityRecord>,
    pub accommodation: Option<PlanAccommodationRecord>,
    pub transportation: Option<PlanTransportationRecord>,
}

impl PlanChildren {
    /// Number of ids `itemize` will draw for `plan`.
    pub fn row_count(plan: &TravelPlan) -> i64 {
        plan.daily_itinerary
            .iter()
            .map(|day| day.activities.len() as i64)
            .sum::<i64>()
            + plan.recommended_accommodation.is_some() as i64
            + plan.recommended_transport.is_some() as i64
    }

    /// Itemizes a plan. `next_id` hands out row ids.
    pub fn itemize(plan_id: i64, plan: &TravelPlan, mut next_id: impl FnMut() -> i64) -> Self {
        let activities = plan
            .daily_itinerary
            .iter()
            .flat_map(|day| {
                day.activities
                    .iter()
                    .map(move |activity| (day.day_number, activity))
            })
            .map(|(day_number, activity)| PlanActivityRecord {
                id: next_id(),
                travel_plan_id: plan_id,
                day_number,
                activity_name: activity.name.clone(),
                activity_type: None,
                description: activity.description.clone(),
                estimated_cost: activity.cost,
                location: activity.location.clone(),
                start_time: activity.time.clone(),
            })
            .collect();

        let nights = plan.daily_itinerary.len().max(1) as f64;
        let accommodation = plan
            .recommended_accommodation
            .as_ref()
            .map(|name| PlanAccommodationRecord {
                id: next_id(),
                travel_plan_id: plan_id,
                name: name.clone(),
                check_in_date: plan.start_date,
                check_out_date: plan.end_date,
                cost_per_night: plan
                    .budget_breakdown
                    .as_ref()
                    .map(|breakdown| breakdown.accommodation / nights),
            });

        let transportation = plan
            .recommended_transport
            .as_ref()
            .map(|kind| PlanTransportationRecord {
                id: next_id(),
                travel_plan_id: plan_id,
                kind: kind.clone(),
                to_location: plan.destination.as_ref().map(|d| d.name.clone()),
                departure_date: plan.start_date,
                cost: plan
                    .budget_breakdown
                    .as_ref()
                    .map(|breakdown| breakdown.transportation),
            });

        Self {
            activities,
            accommodation,
            transportation,
        }
    }
}
