pub mod activity_catalog;
pub mod budget_optimizer_service;
pub mod budget_table;
pub mod detailed_plan_service;
pub mod itinerary_generation_service;
pub mod recommendation_service;
pub mod reference_data;
