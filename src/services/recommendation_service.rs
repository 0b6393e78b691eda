use serde::Serialize;
use std::sync::Arc;

use crate::models::{
    destination::{AppealDestination, Destination},
    preference::{AgeRange, BudgetLevel, TravelPreference},
};
use crate::services::reference_data::ReferenceData;

const MAX_RECOMMENDATIONS: usize = 5;
const ECONOMY_POPULARITY_THRESHOLD: i32 = 80;
const LUXURY_POPULARITY_THRESHOLD: i32 = 85;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationWeights {
    /// Destination budget level equals the traveller's
    pub budget_match_bonus: i32,
    /// Traveller's age range is in the destination's appeal list
    pub age_appeal_bonus: i32,
    /// Traveller's gender is in the destination's appeal list
    pub gender_appeal_bonus: i32,
    /// Luxury accommodation on a luxury destination, budget on economy
    pub accommodation_bonus: i32,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            budget_match_bonus: 10,
            age_appeal_bonus: 8,
            gender_appeal_bonus: 5,
            accommodation_bonus: 7,
        }
    }
}

fn env_or(key: &str, default: i32) -> i32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl RecommendationWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            budget_match_bonus: env_or("RECOMMEND_BUDGET_BONUS", defaults.budget_match_bonus),
            age_appeal_bonus: env_or("RECOMMEND_AGE_BONUS", defaults.age_appeal_bonus),
            gender_appeal_bonus: env_or("RECOMMEND_GENDER_BONUS", defaults.gender_appeal_bonus),
            accommodation_bonus: env_or(
                "RECOMMEND_ACCOMMODATION_BONUS",
                defaults.accommodation_bonus,
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: AppealDestination,
    pub relevance_score: i32,
}

/// Destination recommendations. Two strategies live here and are kept
/// apart: a profile-scored one over the appeal catalog and a popularity
/// threshold one over the stored destinations.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    reference: Arc<ReferenceData>,
    weights: RecommendationWeights,
}

impl RecommendationService {
    pub fn new(reference: Arc<ReferenceData>, weights: RecommendationWeights) -> Self {
        Self { reference, weights }
    }

    /// Filter the appeal catalog by continent, budget, age and minimum
    /// stay, then rank by relevance score. Ties keep catalog order.
    pub fn recommend(&self, preferences: &TravelPreference) -> Vec<ScoredDestination> {
        let mut scored: Vec<ScoredDestination> = self
            .reference
            .appeal_catalog
            .iter()
            .filter(|destination| self.continent_matches_code(preferences, &destination.continent_code))
            .filter(|destination| is_budget_compatible(destination, preferences.budget_level))
            .filter(|destination| is_age_appropriate(destination, preferences.age_range))
            .filter(|destination| {
                preferences.travel_duration_days >= self.reference.minimum_stay(&destination.name)
            })
            .map(|destination| ScoredDestination {
                relevance_score: self.relevance_score(destination, preferences),
                destination: destination.clone(),
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        scored.truncate(MAX_RECOMMENDATIONS);

        log::debug!(
            "Scored recommendations: {:?}",
            scored
                .iter()
                .map(|s| (&s.destination.name, s.relevance_score))
                .collect::<Vec<_>>()
        );

        scored
    }

    pub fn relevance_score(&self, destination: &AppealDestination, preferences: &TravelPreference) -> i32 {
        let mut score = destination.popularity_score;

        if preferences.budget_level == Some(destination.budget_level) {
            score += self.weights.budget_match_bonus;
        }

        if let Some(age) = preferences.age_range {
            if destination.age_appeal.contains(&age) {
                score += self.weights.age_appeal_bonus;
            }
        }

        if let Some(gender) = preferences.gender {
            if destination.gender_appeal.contains(&gender) {
                score += self.weights.gender_appeal_bonus;
            }
        }

        match (preferences.accommodation_type.as_deref(), destination.budget_level) {
            (Some("luxury"), BudgetLevel::Luxury) | (Some("budget"), BudgetLevel::Economy) => {
                score += self.weights.accommodation_bonus;
            }
            _ => {}
        }

        score
    }

    /// Continent and popularity threshold filter over stored destinations,
    /// most popular first, with personalized descriptions.
    pub fn recommend_by_preference(
        &self,
        preferences: &TravelPreference,
        destinations: Vec<Destination>,
    ) -> Vec<Destination> {
        // Only the recommender's own labels set a floor; questionnaire
        // tiers such as student or business do not.
        let threshold = match preferences.budget_label.as_deref() {
            Some("economy") => Some(ECONOMY_POPULARITY_THRESHOLD),
            Some("luxury") | Some("ultra-luxury") => Some(LUXURY_POPULARITY_THRESHOLD),
            _ => None,
        };

        let mut matches: Vec<Destination> = destinations
            .into_iter()
            .filter(|destination| self.continent_matches_name(preferences, &destination.continent_name))
            .filter(|destination| threshold.map_or(true, |min| destination.popularity_score >= min))
            .collect();

        matches.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
        matches.truncate(MAX_RECOMMENDATIONS);

        for destination in matches.iter_mut() {
            let description = destination.description.take().unwrap_or_default();
            destination.description = Some(threshold_description(&description, preferences));
        }

        matches
    }

    fn continent_matches_code(&self, preferences: &TravelPreference, code: &str) -> bool {
        let name = self
            .reference
            .continents
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .map(|c| c.name.as_str())
            .unwrap_or_default();
        continent_matches(preferences.preferred_continent.as_deref(), code, name)
    }

    fn continent_matches_name(&self, preferences: &TravelPreference, name: &str) -> bool {
        let code = self
            .reference
            .continents
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.code.as_str())
            .unwrap_or_default();
        continent_matches(preferences.preferred_continent.as_deref(), code, name)
    }
}

/// Case-insensitive code equality, or the preference appearing inside the
/// continent name. No preference matches everything.
fn continent_matches(preferred: Option<&str>, code: &str, name: &str) -> bool {
    let Some(preferred) = preferred else {
        return true;
    };
    let preferred = preferred.to_lowercase();
    code.to_lowercase() == preferred || name.to_lowercase().contains(&preferred)
}

/// Destinations may sit at most one level above the traveller's budget.
/// Without a recognized budget level the check is skipped.
fn is_budget_compatible(destination: &AppealDestination, level: Option<BudgetLevel>) -> bool {
    match level {
        Some(level) => destination.budget_level.rank() <= level.rank() + 1,
        None => true,
    }
}

fn is_age_appropriate(destination: &AppealDestination, age: Option<AgeRange>) -> bool {
    age.map_or(true, |age| destination.age_appeal.contains(&age))
}

/// Description for the scored strategy, tuned to age range and budget.
pub fn personalized_description(destination: &AppealDestination, preferences: &TravelPreference) -> String {
    let mut description = destination.description.clone();

    match preferences.age_range {
        Some(AgeRange::From18To25) => description
            .push_str(" Perfect for young adventurers looking for excitement and new experiences."),
        Some(AgeRange::From26To35) => {
            description.push_str(" Ideal for career-focused travelers seeking cultural enrichment.")
        }
        Some(AgeRange::From36To45) | Some(AgeRange::From46To55) => description
            .push_str(" Great for experienced travelers who appreciate refined experiences."),
        Some(AgeRange::From56To65) | Some(AgeRange::Over65) => description
            .push_str(" Perfect for sophisticated travelers seeking comfort and cultural depth."),
        None => {}
    }

    match preferences.budget_level {
        Some(BudgetLevel::Economy) => {
            description.push_str(" Offers excellent value with many free and affordable attractions.")
        }
        Some(BudgetLevel::Luxury) => {
            description.push_str(" Features world-class luxury amenities and exclusive experiences.")
        }
        _ => {}
    }

    description
}

fn threshold_description(original: &str, preferences: &TravelPreference) -> String {
    let mut description = original.to_string();

    match preferences.budget_label.as_deref() {
        Some("economy") => description.push_str(
            " Great value for budget-conscious travelers with plenty of affordable options.",
        ),
        Some("luxury") => description.push_str(
            " Perfect for luxury travelers seeking premium experiences and accommodations.",
        ),
        _ => {}
    }

    match preferences.requested_duration_days {
        Some(days) if days <= 3 => {
            description.push_str(" Ideal for a short getaway with must-see highlights.")
        }
        Some(days) if days >= 7 => description
            .push_str(" Perfect for an extended stay to fully explore the destination."),
        _ => {}
    }

    description
}
