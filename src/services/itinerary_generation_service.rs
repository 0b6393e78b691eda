use crate::models::{
    destination::Destination,
    preference::{BudgetCategory, TravelPreference},
    travel_plan::{DailyItinerary, PlanStatus, TravelPlan},
};
use crate::services::{
    activity_catalog::{self, Slot, Tier},
    budget_table::{budget_breakdown, round_cents, BudgetTable},
};

const MAX_ITINERARY_DAYS: i32 = 14;

#[derive(Debug, Clone)]
pub struct PlanGenerationConfig {
    pub budget_table: BudgetTable,
    pub max_itinerary_days: i32,
}

impl Default for PlanGenerationConfig {
    fn default() -> Self {
        Self {
            budget_table: BudgetTable::Standard,
            max_itinerary_days: MAX_ITINERARY_DAYS,
        }
    }
}

/// Builds rule-based travel plans for a chosen destination.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    config: PlanGenerationConfig,
}

struct Recommendations {
    accommodation: String,
    transportation: String,
    travel_tips: Vec<String>,
    money_saving_tips: Vec<String>,
}

impl PlanGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlanGenerationConfig) -> Self {
        Self { config }
    }

    /// Generate a draft plan. Nothing is persisted here.
    pub fn generate_plan(&self, destination: &Destination, preferences: &TravelPreference) -> TravelPlan {
        let category = preferences.budget_category;
        let duration = preferences.travel_duration_days;
        let daily_budget = self.config.budget_table.base_daily_budget(category);
        let total_budget = self.config.budget_table.total_budget(category, duration);

        let daily_itinerary = self.generate_itinerary(destination, duration, daily_budget, category);
        let places_to_visit = daily_itinerary
            .iter()
            .flat_map(|day| day.activities.iter())
            .filter(|activity| activity.cost > 0.0)
            .count() as u32;

        let recommendations = recommendations(category, destination);

        log::debug!(
            "Generated {} day plan for {} ({} budget, {} per day)",
            daily_itinerary.len(),
            destination.name,
            category.as_str(),
            daily_budget
        );

        TravelPlan {
            id: None,
            title: format!("{} Adventure - {} Budget", destination.name, category.as_str()),
            total_budget: Some(total_budget),
            start_date: None,
            end_date: None,
            status: PlanStatus::Draft,
            destination: Some(destination.clone()),
            recommended_accommodation: Some(recommendations.accommodation),
            recommended_transport: Some(recommendations.transportation),
            daily_itinerary,
            budget_breakdown: Some(budget_breakdown(total_budget, category)),
            travel_tips: recommendations.travel_tips,
            preparation_checklist: preparation_checklist(destination, category),
            places_to_visit,
            money_saving_tips: recommendations.money_saving_tips,
        }
    }

    /// Walk the trip day by day. Day 1 is the arrival template; later days
    /// take one morning, afternoon and evening candidate each, chosen by
    /// `day % list length`. Durations below one day yield no days.
    pub fn generate_itinerary(
        &self,
        destination: &Destination,
        duration_days: i32,
        daily_budget: f64,
        category: BudgetCategory,
    ) -> Vec<DailyItinerary> {
        let tier = Tier::from(category);
        let days = duration_days.min(self.config.max_itinerary_days);

        (1..=days)
            .map(|day| {
                let activities = if day == 1 {
                    activity_catalog::candidates(destination, Slot::Arrival, tier, daily_budget)
                } else {
                    [Slot::Morning, Slot::Afternoon, Slot::Evening]
                        .into_iter()
                        .filter_map(|slot| {
                            let mut list =
                                activity_catalog::candidates(destination, slot, tier, daily_budget);
                            if list.is_empty() {
                                return None;
                            }
                            let index = day as usize % list.len();
                            Some(list.swap_remove(index))
                        })
                        .collect()
                };

                DailyItinerary {
                    day_number: day as u32,
                    estimated_cost: round_cents(activities.iter().map(|a| a.cost).sum()),
                    activities,
                }
            })
            .collect()
    }
}

fn is_destination(destination: &Destination, key: &str) -> bool {
    destination.name.trim().eq_ignore_ascii_case(key)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn recommendations(category: BudgetCategory, destination: &Destination) -> Recommendations {
    match category {
        BudgetCategory::Student => Recommendations {
            accommodation: student_accommodation(destination).to_string(),
            transportation: student_transportation(destination).to_string(),
            travel_tips: student_travel_tips(destination),
            money_saving_tips: student_money_saving_tips(destination),
        },
        BudgetCategory::Economic => Recommendations {
            accommodation: "Budget hotels or guesthouses".to_string(),
            transportation: "Public transport and economy flights".to_string(),
            travel_tips: strings(&[
                "Compare prices across multiple booking platforms",
                "Consider package deals for accommodation + transport",
                "Use local recommendation apps for authentic experiences",
                "Balance splurge experiences with budget-friendly activities",
            ]),
            money_saving_tips: strings(&[
                "Look for lunch specials at restaurants",
                "Use city tourist passes for multiple attractions",
                "Shop at local supermarkets for snacks and drinks",
                "Take advantage of happy hour deals",
            ]),
        },
        _ => Recommendations {
            accommodation: "Mid-range hotels".to_string(),
            transportation: "Mix of public and private transport".to_string(),
            travel_tips: strings(&[
                "Research local customs and etiquette",
                "Download offline maps and translation apps",
                "Keep copies of important documents",
                "Inform your bank about travel dates",
            ]),
            money_saving_tips: strings(&[
                "Use credit cards with no foreign transaction fees",
                "Compare currency exchange rates",
                "Keep track of expenses with a budget app",
                "Set daily spending limits",
            ]),
        },
    }
}

fn student_accommodation(destination: &Destination) -> &'static str {
    if is_destination(destination, "japan") {
        "Hostels, capsule hotels, or Airbnb shared rooms. Consider staying in Shibuya or Shinjuku hostels for easy access to public transport."
    } else if is_destination(destination, "china") {
        "Youth hostels or budget hotels in city centers. Look for accommodations near metro stations."
    } else {
        "Hostels, budget guesthouses, or shared Airbnb accommodations near public transportation."
    }
}

fn student_transportation(destination: &Destination) -> &'static str {
    if is_destination(destination, "japan") {
        "Book night flights for cheaper fares. Get a JR Pass for unlimited train travel. Use local metro and buses instead of taxis."
    } else if is_destination(destination, "china") {
        "Look for budget airlines or night flights. Use high-speed trains between cities and metro within cities."
    } else {
        "Book flights well in advance, consider night flights. Use public transportation, walk when possible."
    }
}

fn student_travel_tips(destination: &Destination) -> Vec<String> {
    let mut tips = strings(&[
        "Book accommodations in advance for better rates",
        "Travel during shoulder season for lower prices",
        "Use student discounts wherever available",
        "Pack light to avoid baggage fees",
    ]);
    if is_destination(destination, "japan") {
        tips.extend(strings(&[
            "Visit convenience stores for affordable meals",
            "Use 100-yen shops for daily necessities",
            "Take advantage of free Wi-Fi at stations and convenience stores",
        ]));
    }
    tips
}

fn student_money_saving_tips(destination: &Destination) -> Vec<String> {
    let mut tips = strings(&[
        "Cook your own meals when possible",
        "Look for group discounts and deals",
        "Use apps like Groupon for activity discounts",
        "Visit free attractions and museums on free days",
    ]);
    if is_destination(destination, "japan") {
        tips.extend(strings(&[
            "Look for 'all-you-can-eat' restaurants for good value",
            "Use discount apps like Gurunavi for restaurant coupons",
            "Shop at Don Quijote for affordable souvenirs",
        ]));
    }
    tips
}

fn preparation_checklist(destination: &Destination, category: BudgetCategory) -> Vec<String> {
    let mut checklist = strings(&[
        "Check passport expiration date",
        "Apply for visa if required",
        "Book flights and accommodation",
        "Get travel insurance",
        "Notify bank of travel plans",
        "Research local emergency contacts",
    ]);

    if is_destination(destination, "japan") {
        checklist.extend(strings(&[
            "Download Google Translate with camera feature",
            "Get a JR Pass if staying more than 7 days",
            "Bring cash as many places don't accept cards",
        ]));
    }

    if category == BudgetCategory::Student {
        checklist.extend(strings(&[
            "Get international student ID card",
            "Research student discounts available",
            "Set up international banking if needed",
        ]));
    }

    checklist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preference::TravelPreferenceDto;

    fn destination(name: &str, country: &str) -> Destination {
        Destination {
            id: 1,
            name: name.to_string(),
            country: country.to_string(),
            continent_name: "Asia".to_string(),
            popularity_score: 95,
            ..Default::default()
        }
    }

    fn preferences(category: &str, duration: i32) -> TravelPreference {
        TravelPreferenceDto {
            budget_category: Some(category.to_string()),
            travel_duration_days: Some(duration),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    #[test]
    fn test_itinerary_length_is_capped_at_fourteen_days() {
        let generator = PlanGenerator::new();
        let peru = destination("Peru", "Peru");
        for duration in [1, 2, 7, 14, 15, 30] {
            let days =
                generator.generate_itinerary(&peru, duration, 160.0, BudgetCategory::Comfortable);
            assert_eq!(days.len() as i32, duration.min(14));
            for (index, day) in days.iter().enumerate() {
                assert_eq!(day.day_number as usize, index + 1);
                assert_eq!(day.activities.len(), 3);
            }
        }
    }

    #[test]
    fn test_non_positive_duration_yields_no_days() {
        let generator = PlanGenerator::new();
        let peru = destination("Peru", "Peru");
        assert!(generator
            .generate_itinerary(&peru, 0, 80.0, BudgetCategory::Economic)
            .is_empty());
        assert!(generator
            .generate_itinerary(&peru, -4, 80.0, BudgetCategory::Economic)
            .is_empty());
    }

    #[test]
    fn test_student_week_in_japan() {
        let plan = PlanGenerator::new().generate_plan(
            &destination("Japan", "Japan"),
            &preferences("student", 7),
        );

        assert_eq!(plan.title, "Japan Adventure - student Budget");
        assert_eq!(plan.total_budget, Some(280.0));
        assert_eq!(plan.status, PlanStatus::Draft);

        let arrival: Vec<f64> = plan.daily_itinerary[0]
            .activities
            .iter()
            .map(|a| a.cost)
            .collect();
        assert_eq!(arrival, vec![0.0, 0.0, 8.0]);

        let paid = plan
            .daily_itinerary
            .iter()
            .flat_map(|d| d.activities.iter())
            .filter(|a| a.cost > 0.0)
            .count() as u32;
        assert_eq!(plan.places_to_visit, paid);

        assert!(plan
            .recommended_accommodation
            .as_deref()
            .unwrap()
            .starts_with("Hostels, capsule hotels"));
        assert_eq!(plan.travel_tips.len(), 7);
        assert_eq!(plan.preparation_checklist.len(), 12);
    }

    #[test]
    fn test_round_robin_selection_is_deterministic() {
        let generator = PlanGenerator::new();
        let peru = destination("Peru", "Peru");
        let first = generator.generate_itinerary(&peru, 7, 160.0, BudgetCategory::Business);
        let second = generator.generate_itinerary(&peru, 7, 160.0, BudgetCategory::Business);
        assert_eq!(first, second);

        // Day 2 picks index 2 % 3 == 2, day 3 wraps to index 0.
        assert_eq!(first[1].activities[0].name, "Historical Site Tour");
        assert_eq!(first[2].activities[0].name, "Traditional Breakfast");
        assert_eq!(first[3].activities[0].name, "Museum Visit");
    }

    #[test]
    fn test_daily_cost_is_sum_of_activities() {
        let plan = PlanGenerator::new().generate_plan(
            &destination("China", "China"),
            &preferences("luxury", 5),
        );
        for day in &plan.daily_itinerary {
            let sum: f64 = day.activities.iter().map(|a| a.cost).sum();
            assert!((day.estimated_cost - sum).abs() < 0.01);
        }
    }

    #[test]
    fn test_breakdown_matches_total_for_every_category() {
        let generator = PlanGenerator::new();
        let peru = destination("Peru", "Peru");
        for category in ["student", "economic", "comfortable", "business", "luxury", "unknown"] {
            let plan = generator.generate_plan(&peru, &preferences(category, 9));
            let total = plan.total_budget.unwrap();
            let breakdown = plan.budget_breakdown.unwrap();
            assert!((breakdown.total() - total).abs() <= 0.05);
        }
    }

    #[test]
    fn test_economic_recommendations() {
        let plan = PlanGenerator::new().generate_plan(
            &destination("Peru", "Peru"),
            &preferences("economy", 3),
        );
        assert_eq!(
            plan.recommended_accommodation.as_deref(),
            Some("Budget hotels or guesthouses")
        );
        assert_eq!(plan.preparation_checklist.len(), 6);
    }
}
