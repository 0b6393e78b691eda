use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOptimizedPlan {
    pub total_budget: f64,
    pub daily_budget: f64,
    pub savings: Vec<BudgetSaving>,
    pub accommodation: AccommodationRecommendation,
    pub transportation: TransportationRecommendation,
    pub activities: Vec<ActivityRecommendation>,
    pub daily_itinerary: Vec<OptimizedDay>,
    pub cost_breakdown: CostBreakdown,
    pub preparation_checklist: Vec<ChecklistItem>,
    pub travel_tips: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetSaving {
    pub category: String,
    pub tip: String,
    pub savings: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationRecommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub suggestions: Vec<String>,
    pub avg_cost_per_night: f64,
    pub saving_tips: Vec<String>,
    pub platforms: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportationRecommendation {
    pub primary: String,
    pub local: Vec<String>,
    pub cost_saving_tips: Vec<String>,
    pub avg_cost: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityTier {
    Free,
    LowCost,
    MidRange,
    Premium,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecommendation {
    pub name: String,
    #[serde(rename = "type")]
    pub tier: ActivityTier,
    pub cost: f64,
    pub description: String,
    pub saving_tips: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Transport,
    Accommodation,
    Food,
    Activity,
    Shopping,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedItem {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_tip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedDay {
    pub day: u32,
    pub total_cost: f64,
    pub activities: Vec<OptimizedItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CostBreakdown {
    pub accommodation: f64,
    pub transportation: f64,
    pub food: f64,
    pub activities: f64,
    pub shopping: f64,
    pub miscellaneous: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Documents,
    Health,
    Money,
    Packing,
    Technology,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub category: ChecklistCategory,
    pub item: String,
    pub required: bool,
    pub days_before_trip: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
