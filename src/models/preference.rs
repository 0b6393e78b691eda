use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TRAVEL_DURATION_DAYS: i32 = 7;
pub const MAX_SELECTED_CITIES: usize = 3;
pub const MAX_TRIP_DAYS: i32 = 14;

#[derive(Debug, Error, PartialEq)]
pub enum PreferenceError {
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
    #[error("Unknown age range: {0}")]
    UnknownAgeRange(String),
    #[error("At most 3 cities can be selected, got {0}")]
    TooManyCities(usize),
    #[error("Trips are limited to 14 days, got {0}")]
    DurationTooLong(i32),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "56-65")]
    From56To65,
    #[serde(rename = "65+")]
    Over65,
}

impl AgeRange {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "18-25" => Some(AgeRange::From18To25),
            "26-35" => Some(AgeRange::From26To35),
            "36-45" => Some(AgeRange::From36To45),
            "46-55" => Some(AgeRange::From46To55),
            "56-65" => Some(AgeRange::From56To65),
            "65+" => Some(AgeRange::Over65),
            _ => None,
        }
    }

    /// Maps the advanced questionnaire's decade brackets onto the bracket
    /// sharing the same lower bound or the nearest one above it.
    pub fn from_advanced_label(label: &str) -> Option<Self> {
        match label.trim() {
            "20-29" => Some(AgeRange::From18To25),
            "30-39" => Some(AgeRange::From26To35),
            "40-49" => Some(AgeRange::From36To45),
            "50-59" => Some(AgeRange::From46To55),
            "60+" => Some(AgeRange::From56To65),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::From18To25 => "18-25",
            AgeRange::From26To35 => "26-35",
            AgeRange::From36To45 => "36-45",
            AgeRange::From46To55 => "46-55",
            AgeRange::From56To65 => "56-65",
            AgeRange::Over65 => "65+",
        }
    }
}

/// Spending bracket driving the daily budget and the breakdown percentages.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Student,
    Economic,
    Comfortable,
    Business,
    Luxury,
}

impl BudgetCategory {
    /// Accepts the questionnaire labels plus the recommender's vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "student" => Some(BudgetCategory::Student),
            "economic" | "economy" => Some(BudgetCategory::Economic),
            "comfortable" | "mid-range" => Some(BudgetCategory::Comfortable),
            "business" => Some(BudgetCategory::Business),
            "luxury" | "ultra-luxury" => Some(BudgetCategory::Luxury),
            _ => None,
        }
    }

    /// Unknown or missing labels fall back to `Comfortable`.
    pub fn from_label_or_default(label: Option<&str>) -> Self {
        match label.and_then(Self::from_label) {
            Some(category) => category,
            None => {
                log::debug!(
                    "Budget category {:?} not recognized, using comfortable",
                    label
                );
                BudgetCategory::Comfortable
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Student => "student",
            BudgetCategory::Economic => "economic",
            BudgetCategory::Comfortable => "comfortable",
            BudgetCategory::Business => "business",
            BudgetCategory::Luxury => "luxury",
        }
    }
}

/// Four-step scale used to match travellers against destinations.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Economy,
    MidRange,
    Luxury,
    UltraLuxury,
}

impl BudgetLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "economy" | "economic" | "student" => Some(BudgetLevel::Economy),
            "mid-range" | "comfortable" => Some(BudgetLevel::MidRange),
            "luxury" | "business" => Some(BudgetLevel::Luxury),
            "ultra-luxury" => Some(BudgetLevel::UltraLuxury),
            _ => None,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            BudgetLevel::Economy => 0,
            BudgetLevel::MidRange => 1,
            BudgetLevel::Luxury => 2,
            BudgetLevel::UltraLuxury => 3,
        }
    }
}

/// Preference payload as sent by the questionnaire. The advanced
/// questionnaire names its fields `budget`, `duration` and `continent`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferenceDto {
    pub gender: Option<String>,
    pub age_range: Option<String>,
    #[serde(alias = "budget")]
    pub budget_category: Option<String>,
    #[serde(alias = "continent")]
    pub preferred_continent: Option<String>,
    #[serde(alias = "travelDuration", alias = "duration")]
    pub travel_duration_days: Option<i32>,
    pub selected_destination: Option<String>,
    #[serde(default)]
    pub selected_cities: Vec<String>,
    pub accommodation_type: Option<String>,
    pub transportation_preference: Option<String>,
}

/// Normalized preferences. Every rule lookup goes through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelPreference {
    pub gender: Option<Gender>,
    pub age_range: Option<AgeRange>,
    pub budget_category: BudgetCategory,
    pub budget_level: Option<BudgetLevel>,
    /// Lower-cased budget label exactly as sent.
    pub budget_label: Option<String>,
    pub preferred_continent: Option<String>,
    /// Defaults to a week when the traveller left it out.
    pub travel_duration_days: i32,
    pub requested_duration_days: Option<i32>,
    pub selected_destination: Option<String>,
    pub selected_cities: Vec<String>,
    pub accommodation_type: Option<String>,
    pub transportation_preference: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl TravelPreferenceDto {
    /// Rewrites an advanced questionnaire age bracket into the standard
    /// vocabulary. Anything else is left for `normalize` to judge.
    pub fn with_advanced_age_range(mut self) -> Self {
        if let Some(age) = non_empty(&self.age_range).and_then(AgeRange::from_advanced_label) {
            self.age_range = Some(age.as_str().to_string());
        }
        self
    }

    pub fn normalize(&self) -> Result<TravelPreference, PreferenceError> {
        let gender = match non_empty(&self.gender) {
            Some(label) => Some(
                Gender::from_label(label)
                    .ok_or_else(|| PreferenceError::UnknownGender(label.to_string()))?,
            ),
            None => None,
        };

        let age_range = match non_empty(&self.age_range) {
            Some(label) => Some(
                AgeRange::from_label(label)
                    .ok_or_else(|| PreferenceError::UnknownAgeRange(label.to_string()))?,
            ),
            None => None,
        };

        if self.selected_cities.len() > MAX_SELECTED_CITIES {
            return Err(PreferenceError::TooManyCities(self.selected_cities.len()));
        }

        let budget_label = non_empty(&self.budget_category);

        Ok(TravelPreference {
            gender,
            age_range,
            budget_category: BudgetCategory::from_label_or_default(budget_label),
            budget_level: budget_label.and_then(BudgetLevel::from_label),
            budget_label: budget_label.map(str::to_lowercase),
            preferred_continent: non_empty(&self.preferred_continent).map(str::to_string),
            travel_duration_days: self
                .travel_duration_days
                .unwrap_or(DEFAULT_TRAVEL_DURATION_DAYS),
            requested_duration_days: self.travel_duration_days,
            selected_destination: non_empty(&self.selected_destination).map(str::to_string),
            selected_cities: self
                .selected_cities
                .iter()
                .map(|city| city.trim().to_string())
                .filter(|city| !city.is_empty())
                .collect(),
            accommodation_type: non_empty(&self.accommodation_type).map(str::to_lowercase),
            transportation_preference: non_empty(&self.transportation_preference)
                .map(str::to_string),
        })
    }
}
