//! JSON contract of the LLM-generated detailed plan.
//!
//! Every field defaults when missing so that a partially filled model
//! answer still parses; a response that is not JSON at all does not.

use serde::{Deserialize, Serialize};

use crate::models::preference::{
    AgeRange, Gender, PreferenceError, MAX_SELECTED_CITIES, MAX_TRIP_DAYS,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPlanRequest {
    #[serde(default)]
    pub selected_destination: String,
    #[serde(default)]
    pub selected_cities: Vec<String>,
    #[serde(default)]
    pub travel_duration_days: i32,
    #[serde(default)]
    pub budget_category: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age_range: String,
}

impl DetailedPlanRequest {
    /// Blank gender and age range are allowed; anything else must be a
    /// known label.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        if self.selected_cities.len() > MAX_SELECTED_CITIES {
            return Err(PreferenceError::TooManyCities(self.selected_cities.len()));
        }
        if self.travel_duration_days > MAX_TRIP_DAYS {
            return Err(PreferenceError::DurationTooLong(self.travel_duration_days));
        }
        let gender = self.gender.trim();
        if !gender.is_empty() && Gender::from_label(gender).is_none() {
            return Err(PreferenceError::UnknownGender(gender.to_string()));
        }
        let age_range = self.age_range.trim();
        if !age_range.is_empty() && AgeRange::from_label(age_range).is_none() {
            return Err(PreferenceError::UnknownAgeRange(age_range.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedTravelPlan {
    pub summary: PlanSummary,
    pub flights: FlightInfo,
    pub accommodations: Vec<AccommodationInfo>,
    pub daily_itinerary: Vec<DayItinerary>,
    pub tours: Vec<TourInfo>,
    pub practical_info: PracticalInfo,
    pub budget_breakdown: DetailedBudgetBreakdown,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanSummary {
    pub total_budget: f64,
    pub daily_average: f64,
    pub highlights: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightInfo {
    pub outbound: FlightOption,
    pub internal: Vec<FlightOption>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightOption {
    pub airlines: Vec<String>,
    pub route: String,
    pub avg_price: f64,
    pub booking_tips: Vec<String>,
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationInfo {
    pub city: String,
    pub hotels: Vec<HotelRecommendation>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelRecommendation {
    pub name: String,
    pub address: String,
    pub price_range: String,
    pub booking_platforms: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DayItinerary {
    pub day: u32,
    pub city: String,
    pub activities: Vec<PlannedActivity>,
    pub meals: Vec<MealRecommendation>,
    pub transportation: TransportationDay,
    pub navigation: Vec<NavigationInfo>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannedActivity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub address: String,
    pub cost: f64,
    pub opening_hours: String,
    pub booking_info: String,
    pub booking_url: String,
    pub phone_number: String,
    pub estimated_duration: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MealRecommendation {
    pub time: String,
    pub restaurant: String,
    pub cuisine: String,
    pub address: String,
    pub phone_number: String,
    pub price_range: String,
    pub must_try_dishes: Vec<String>,
    pub reservation_required: bool,
    pub booking_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportationDay {
    pub method: String,
    pub cost: f64,
    pub details: String,
    pub ticketing_info: String,
    pub mobile_app: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationInfo {
    pub from: String,
    pub to: String,
    pub route: String,
    pub estimated_time: String,
    pub traffic_notes: String,
    pub maps_link: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TourInfo {
    pub name: String,
    pub company: String,
    pub duration: String,
    pub price: f64,
    pub booking_url: String,
    pub includes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticalInfo {
    pub visa: String,
    pub currency: String,
    pub tipping: String,
    pub safety_tips: Vec<String>,
    pub emergency_numbers: EmergencyNumbers,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EmergencyNumbers {
    pub police: String,
    pub medical: String,
    pub embassy: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DetailedBudgetBreakdown {
    pub flights: f64,
    pub accommodation: f64,
    pub transportation: f64,
    pub food: f64,
    pub activities: f64,
    pub tours: f64,
    pub misc: f64,
}
