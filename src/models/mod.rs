pub mod destination;
pub mod detailed_plan;
pub mod optimized_plan;
pub mod preference;
pub mod travel_plan;
pub mod user;
