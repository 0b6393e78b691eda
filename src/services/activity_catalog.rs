//! Candidate activities per time slot.
//!
//! Costs are fractions of the day's budget; zero means free. Japan and
//! China carry their own standard-tier morning and afternoon lists, every
//! other destination uses the generic ones.

use crate::{
    models::{destination::Destination, preference::BudgetCategory, travel_plan::Activity},
    services::budget_table::round_cents,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Arrival,
    Morning,
    Afternoon,
    Evening,
}

/// Student travellers get the free and cheap variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Student,
    Standard,
}

impl From<BudgetCategory> for Tier {
    fn from(category: BudgetCategory) -> Self {
        match category {
            BudgetCategory::Student => Tier::Student,
            _ => Tier::Standard,
        }
    }
}

struct Template {
    time: &'static str,
    name: &'static str,
    /// `{name}` and `{country}` are filled from the destination.
    description: &'static str,
    fraction: f64,
}

const fn t(time: &'static str, name: &'static str, description: &'static str, fraction: f64) -> Template {
    Template {
        time,
        name,
        description,
        fraction,
    }
}

const STUDENT_ARRIVAL: [Template; 3] = [
    t("09:00", "Budget Accommodation Check-in", "Check into hostel or budget accommodation in {name}.", 0.0),
    t("14:00", "Free Walking Tour", "Join a free walking tour to get oriented in {name}.", 0.0),
    t("19:00", "Street Food Dinner", "Try affordable local street food in {name}.", 0.2),
];

const STANDARD_ARRIVAL: [Template; 3] = [
    t("09:00", "Arrival & Hotel Check-in", "Arrive in {name} and check into your accommodation.", 0.0),
    t("14:00", "City Orientation Walk", "Get familiar with {name}'s main areas and landmarks.", 0.1),
    t("19:00", "Welcome Dinner", "Try authentic {country} cuisine at a local restaurant.", 0.3),
];

const STUDENT_MORNING: [Template; 3] = [
    t("08:00", "Convenience Store Breakfast", "Grab affordable breakfast from a convenience store.", 0.08),
    t("09:00", "Free Museum Day", "Visit museums on free admission days in {name}.", 0.0),
    t("09:30", "Public Park Visit", "Explore free public parks and gardens in {name}.", 0.0),
];

const STANDARD_MORNING: [Template; 3] = [
    t("08:00", "Traditional Breakfast", "Experience a traditional {country} breakfast.", 0.15),
    t("09:00", "Museum Visit", "Explore the cultural heritage of {name}.", 0.2),
    t("09:30", "Historical Site Tour", "Discover the rich history of {name}.", 0.25),
];

const STUDENT_AFTERNOON: [Template; 3] = [
    t("13:00", "Local Market Lunch", "Eat cheaply at local markets in {name}.", 0.15),
    t("14:00", "Free Cultural Sites", "Visit free cultural sites and temples in {name}.", 0.0),
    t("15:00", "City Hiking Trail", "Explore free hiking trails near {name}.", 0.0),
];

const STANDARD_AFTERNOON: [Template; 3] = [
    t("13:00", "Local Market Visit", "Browse local markets and try street food in {name}.", 0.2),
    t("14:00", "Cultural Experience", "Participate in a cultural activity unique to {name}.", 0.3),
    t("15:00", "Scenic Viewpoint", "Visit the best viewpoint in {name}.", 0.1),
];

const STUDENT_EVENING: [Template; 3] = [
    t("18:00", "Free Sunset Viewing", "Watch sunset from free public viewpoints in {name}.", 0.0),
    t("19:00", "Budget Restaurant", "Dine at budget-friendly local restaurants in {name}.", 0.25),
    t("20:00", "Free Night Markets", "Browse free night markets and street entertainment in {name}.", 0.0),
];

const STANDARD_EVENING: [Template; 3] = [
    t("18:00", "Sunset Experience", "Watch the sunset from {name}'s most beautiful spot.", 0.15),
    t("19:00", "Fine Dining", "Enjoy dinner at a highly-rated restaurant in {name}.", 0.35),
    t("20:00", "Night Entertainment", "Experience {name}'s nightlife and entertainment.", 0.25),
];

const JAPAN_MORNING: [Template; 3] = [
    t("08:00", "Tsukiji Outer Market Breakfast", "Start the day with fresh sushi and tamagoyaki in {name}.", 0.15),
    t("09:00", "Senso-ji Temple Visit", "Walk through Kaminarimon gate to {name}'s oldest temple.", 0.08),
    t("09:30", "Mount Fuji Day Trip", "Take the train out to the Fuji Five Lakes area.", 0.35),
];

const JAPAN_AFTERNOON: [Template; 3] = [
    t("13:00", "Authentic Ramen Lunch", "Queue with locals at a {country} ramen counter.", 0.1),
    t("14:00", "Shibuya Crossing & Harajuku", "Explore the busiest crossing in {name} and the shops beyond.", 0.15),
    t("15:00", "Traditional Onsen", "Relax in a hot spring bath the {country} way.", 0.25),
];

const CHINA_MORNING: [Template; 3] = [
    t("08:00", "Dim Sum Breakfast", "Share steamed dumplings at a busy {country} teahouse.", 0.1),
    t("09:00", "Forbidden City Tour", "Explore the imperial palace at the heart of {name}.", 0.2),
    t("09:30", "Great Wall Excursion", "Hike a restored section of the Great Wall.", 0.35),
];

const CHINA_AFTERNOON: [Template; 3] = [
    t("13:00", "Hutong Noodle Lunch", "Eat hand-pulled noodles in the old lanes of {name}.", 0.08),
    t("14:00", "Terracotta Warriors", "See the buried army that guarded the first emperor of {country}.", 0.3),
    t("15:00", "Shanghai Bund Walk", "Stroll the riverside promenade and its colonial facades.", 0.0),
];

fn templates(destination_key: &str, slot: Slot, tier: Tier) -> &'static [Template] {
    match (slot, tier) {
        (Slot::Arrival, Tier::Student) => &STUDENT_ARRIVAL,
        (Slot::Arrival, Tier::Standard) => &STANDARD_ARRIVAL,
        (Slot::Morning, Tier::Student) => &STUDENT_MORNING,
        (Slot::Morning, Tier::Standard) => match destination_key {
            "japan" => &JAPAN_MORNING,
            "china" => &CHINA_MORNING,
            _ => &STANDARD_MORNING,
        },
        (Slot::Afternoon, Tier::Student) => &STUDENT_AFTERNOON,
        (Slot::Afternoon, Tier::Standard) => match destination_key {
            "japan" => &JAPAN_AFTERNOON,
            "china" => &CHINA_AFTERNOON,
            _ => &STANDARD_AFTERNOON,
        },
        (Slot::Evening, Tier::Student) => &STUDENT_EVENING,
        (Slot::Evening, Tier::Standard) => &STANDARD_EVENING,
    }
}

/// Candidate activities for a slot, priced against `daily_budget`.
pub fn candidates(
    destination: &Destination,
    slot: Slot,
    tier: Tier,
    daily_budget: f64,
) -> Vec<Activity> {
    let key = destination.name.trim().to_lowercase();
    templates(&key, slot, tier)
        .iter()
        .map(|template| Activity {
            time: template.time.to_string(),
            name: template.name.to_string(),
            description: template
                .description
                .replace("{name}", &destination.name)
                .replace("{country}", &destination.country),
            cost: round_cents(daily_budget * template.fraction),
            location: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(name: &str, country: &str) -> Destination {
        Destination {
            id: 1,
            name: name.to_string(),
            country: country.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_list_has_three_candidates_with_known_fractions() {
        let allowed = [0.0, 0.08, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35];
        for key in ["japan", "china", "peru"] {
            for slot in [Slot::Arrival, Slot::Morning, Slot::Afternoon, Slot::Evening] {
                for tier in [Tier::Student, Tier::Standard] {
                    let list = templates(key, slot, tier);
                    assert_eq!(list.len(), 3);
                    assert!(list.iter().all(|t| allowed.contains(&t.fraction)));
                }
            }
        }
    }

    #[test]
    fn test_descriptions_are_personalized() {
        let lima = destination("Lima", "Peru");
        let arrival = candidates(&lima, Slot::Arrival, Tier::Standard, 160.0);
        assert_eq!(
            arrival[1].description,
            "Get familiar with Lima's main areas and landmarks."
        );
        assert_eq!(
            arrival[2].description,
            "Try authentic Peru cuisine at a local restaurant."
        );
        assert_eq!(arrival[2].cost, 48.0);
    }

    #[test]
    fn test_japan_uses_its_own_standard_lists() {
        let japan = destination("Japan", "Japan");
        let morning = candidates(&japan, Slot::Morning, Tier::Standard, 160.0);
        assert_eq!(morning[1].name, "Senso-ji Temple Visit");

        let student = candidates(&japan, Slot::Morning, Tier::Student, 40.0);
        assert_eq!(student[0].name, "Convenience Store Breakfast");
    }

    #[test]
    fn test_tier_from_category() {
        assert_eq!(Tier::from(BudgetCategory::Student), Tier::Student);
        assert_eq!(Tier::from(BudgetCategory::Luxury), Tier::Standard);
    }
}
