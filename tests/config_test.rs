use serial_test::serial;

use travel_planner_api::services::{
    detailed_plan_service::PlannerConfig, recommendation_service::RecommendationWeights,
};

#[test]
#[serial]
fn test_recommendation_weights_from_env() {
    std::env::set_var("RECOMMEND_BUDGET_BONUS", "20");
    std::env::set_var("RECOMMEND_GENDER_BONUS", "not-a-number");

    let weights = RecommendationWeights::from_env();
    assert_eq!(weights.budget_match_bonus, 20);
    assert_eq!(weights.gender_appeal_bonus, 5);
    assert_eq!(weights.age_appeal_bonus, 8);

    std::env::remove_var("RECOMMEND_BUDGET_BONUS");
    std::env::remove_var("RECOMMEND_GENDER_BONUS");
}

#[test]
#[serial]
fn test_planner_config_from_env() {
    std::env::set_var("QWEN_API_KEY", "   ");
    std::env::set_var("QWEN_BASE_URL", "http://localhost:8000/v1");

    let config = PlannerConfig::from_env();
    assert_eq!(config.api_key, None);
    assert_eq!(config.base_url, "http://localhost:8000/v1");
    assert_eq!(config.model, "qwen-turbo");
    assert_eq!(config.max_tokens, 4000);

    std::env::set_var("QWEN_API_KEY", "sk-test");
    assert_eq!(PlannerConfig::from_env().api_key.as_deref(), Some("sk-test"));

    std::env::remove_var("QWEN_API_KEY");
    std::env::remove_var("QWEN_BASE_URL");
}
