use crate::models::{preference::BudgetCategory, travel_plan::BudgetBreakdown};

/// Base daily budget the standard multipliers apply to.
pub const STANDARD_BASE_DAILY_BUDGET: f64 = 80.0;

/// The two daily budget tables in use. They disagree on purpose-specific
/// numbers, so callers name the one they want.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTable {
    /// `80 x multiplier`, used by the itinerary generator.
    Standard,
    /// Absolute daily bases, used by the budget optimizer.
    Optimizer,
}

impl BudgetTable {
    pub fn multiplier(&self, category: BudgetCategory) -> f64 {
        match self {
            BudgetTable::Standard => match category {
                BudgetCategory::Student => 0.5,
                BudgetCategory::Economic => 1.0,
                BudgetCategory::Comfortable => 2.0,
                BudgetCategory::Business => 3.5,
                BudgetCategory::Luxury => 6.0,
            },
            BudgetTable::Optimizer => 1.0,
        }
    }

    pub fn base_daily_budget(&self, category: BudgetCategory) -> f64 {
        match self {
            BudgetTable::Standard => STANDARD_BASE_DAILY_BUDGET * self.multiplier(category),
            BudgetTable::Optimizer => match category {
                BudgetCategory::Student => 25.0,
                BudgetCategory::Economic => 50.0,
                BudgetCategory::Comfortable => 100.0,
                BudgetCategory::Business => 200.0,
                BudgetCategory::Luxury => 400.0,
            },
        }
    }

    /// Total for a trip. Non-positive durations budget nothing.
    pub fn total_budget(&self, category: BudgetCategory, duration_days: i32) -> f64 {
        round_cents(self.base_daily_budget(category) * duration_days.max(0) as f64)
    }
}

/// Breakdown percentages as (accommodation, transportation, food, activities, misc).
pub fn breakdown_shares(category: BudgetCategory) -> [f64; 5] {
    match category {
        BudgetCategory::Student => [0.35, 0.25, 0.25, 0.10, 0.05],
        _ => [0.40, 0.20, 0.20, 0.15, 0.05],
    }
}

/// Splits `total` into spending categories. Each share is rounded to cents
/// and `misc` takes whatever rounding left over, so the parts add back up to
/// the total.
pub fn budget_breakdown(total: f64, category: BudgetCategory) -> BudgetBreakdown {
    let [accommodation, transportation, food, activities, _] = breakdown_shares(category);
    let accommodation = round_cents(total * accommodation);
    let transportation = round_cents(total * transportation);
    let food = round_cents(total * food);
    let activities = round_cents(total * activities);
    let misc = round_cents(total - accommodation - transportation - food - activities);

    BudgetBreakdown {
        accommodation,
        transportation,
        food,
        activities,
        misc,
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [BudgetCategory; 5] = [
        BudgetCategory::Student,
        BudgetCategory::Economic,
        BudgetCategory::Comfortable,
        BudgetCategory::Business,
        BudgetCategory::Luxury,
    ];

    #[test]
    fn test_standard_table() {
        let table = BudgetTable::Standard;
        assert_eq!(table.base_daily_budget(BudgetCategory::Student), 40.0);
        assert_eq!(table.base_daily_budget(BudgetCategory::Economic), 80.0);
        assert_eq!(table.base_daily_budget(BudgetCategory::Comfortable), 160.0);
        assert_eq!(table.base_daily_budget(BudgetCategory::Business), 280.0);
        assert_eq!(table.base_daily_budget(BudgetCategory::Luxury), 480.0);
    }

    #[test]
    fn test_optimizer_table_is_separate() {
        let table = BudgetTable::Optimizer;
        assert_eq!(table.base_daily_budget(BudgetCategory::Student), 25.0);
        assert_eq!(table.base_daily_budget(BudgetCategory::Luxury), 400.0);
        assert_ne!(
            table.base_daily_budget(BudgetCategory::Comfortable),
            BudgetTable::Standard.base_daily_budget(BudgetCategory::Comfortable)
        );
    }

    #[test]
    fn test_shares_sum_to_one_hundred_percent() {
        for category in ALL_CATEGORIES {
            let sum: f64 = breakdown_shares(category).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", category, sum);
        }
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        for category in ALL_CATEGORIES {
            for total in [0.0, 280.0, 1120.0, 3333.33, 47.77] {
                let breakdown = budget_breakdown(total, category);
                assert!(
                    (breakdown.total() - total).abs() <= 0.05,
                    "{:?}: {} != {}",
                    category,
                    breakdown.total(),
                    total
                );
            }
        }
    }

    #[test]
    fn test_student_breakdown_percentages() {
        let breakdown = budget_breakdown(280.0, BudgetCategory::Student);
        assert_eq!(breakdown.accommodation, 98.0);
        assert_eq!(breakdown.transportation, 70.0);
        assert_eq!(breakdown.food, 70.0);
        assert_eq!(breakdown.activities, 28.0);
        assert_eq!(breakdown.misc, 14.0);
    }

    #[test]
    fn test_total_budget_ignores_negative_durations() {
        assert_eq!(BudgetTable::Standard.total_budget(BudgetCategory::Economic, 7), 560.0);
        assert_eq!(BudgetTable::Standard.total_budget(BudgetCategory::Economic, -3), 0.0);
    }
}
