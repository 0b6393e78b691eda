use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::detailed_plan::{
    DayItinerary, DetailedPlanRequest, DetailedTravelPlan, EmergencyNumbers, FlightInfo,
    FlightOption, MealRecommendation, NavigationInfo, PlanSummary, PlannedActivity, PracticalInfo,
    TransportationDay,
};
use crate::models::preference::MAX_TRIP_DAYS;
use crate::services::budget_table::round_cents;

const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
const DEFAULT_MODEL: &str = "qwen-turbo";
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f64 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const FALLBACK_TOTAL_BUDGET: f64 = 2000.0;

const SYSTEM_MESSAGE: &str = "You are an expert travel planner specializing in creating detailed, actionable travel itineraries with specific recommendations for flights, hotels, transportation, tours, and dining. Always provide realistic pricing, specific business names, and practical booking information.";

const JSON_CONTRACT: &str = r#"{
  "summary": {
    "totalBudget": number,
    "dailyAverage": number,
    "highlights": ["string"]
  },
  "flights": {
    "outbound": {
      "airlines": ["string"],
      "route": "string",
      "avgPrice": number,
      "bookingTips": ["string"]
    },
    "internal": [{
      "route": "string",
      "options": ["string"],
      "avgPrice": number
    }]
  },
  "accommodations": [{
    "city": "string",
    "hotels": [{
      "name": "string",
      "address": "string",
      "priceRange": "string",
      "bookingPlatforms": ["string"],
      "features": ["string"]
    }]
  }],
  "dailyItinerary": [{
    "day": number,
    "city": "string",
    "activities": [{
      "time": "string",
      "activity": "string",
      "location": "string",
      "address": "string",
      "cost": number,
      "openingHours": "string",
      "bookingInfo": "string",
      "bookingUrl": "string",
      "phoneNumber": "string",
      "estimatedDuration": "string"
    }],
    "meals": [{
      "time": "string",
      "restaurant": "string",
      "cuisine": "string",
      "address": "string",
      "phoneNumber": "string",
      "priceRange": "string",
      "mustTryDishes": ["string"],
      "reservationRequired": boolean,
      "bookingUrl": "string"
    }],
    "transportation": {
      "method": "string",
      "cost": number,
      "details": "string",
      "ticketingInfo": "string",
      "mobileApp": "string"
    },
    "navigation": [{
      "from": "string",
      "to": "string",
      "route": "string",
      "estimatedTime": "string",
      "trafficNotes": "string",
      "mapsLink": "string"
    }]
  }],
  "tours": [{
    "name": "string",
    "company": "string",
    "duration": "string",
    "price": number,
    "bookingUrl": "string",
    "includes": ["string"]
  }],
  "practicalInfo": {
    "visa": "string",
    "currency": "string",
    "tipping": "string",
    "safetyTips": ["string"],
    "emergencyNumbers": {
      "police": "string",
      "medical": "string",
      "embassy": "string"
    }
  },
  "budgetBreakdown": {
    "flights": number,
    "accommodation": number,
    "transportation": number,
    "food": number,
    "activities": number,
    "tours": number,
    "misc": number
  }
}"#;

#[derive(Debug, Error)]
pub enum PlanFetchError {
    #[error("QWEN_API_KEY is not configured")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} error: {message}")]
    Status { status: u16, message: String },
    #[error("Empty response from model")]
    EmptyResponse,
    #[error("Model response is not a valid plan: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PlannerConfig {
    /// Read `QWEN_API_KEY` and `QWEN_BASE_URL`; everything else is fixed.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: std::env::var("QWEN_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: std::env::var("QWEN_BASE_URL").unwrap_or(defaults.base_url),
            ..defaults
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Detailed plans from an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct DetailedPlanService {
    client: reqwest::Client,
    config: PlannerConfig,
}

impl DetailedPlanService {
    pub fn new(config: PlannerConfig) -> Result<Self, PlanFetchError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The configured key with all but its ends hidden, if there is one.
    pub fn masked_api_key(&self) -> Option<String> {
        self.config.api_key.as_deref().map(mask_key)
    }

    /// One attempt against the model. Any failure is returned to the caller.
    pub async fn fetch_detailed_plan(
        &self,
        request: &DetailedPlanRequest,
    ) -> Result<DetailedTravelPlan, PlanFetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(PlanFetchError::MissingApiKey)?;

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_MESSAGE },
                { "role": "user", "content": build_prompt(request) },
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let response = self
            .client
            .post(chat_url(&self.config.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|message| message.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(text);
            return Err(PlanFetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(PlanFetchError::EmptyResponse)?;

        Ok(serde_json::from_str(strip_code_fences(&content))?)
    }

    /// Model plan when available, the canned plan otherwise.
    pub async fn generate_detailed_plan(&self, request: &DetailedPlanRequest) -> DetailedTravelPlan {
        match self.fetch_detailed_plan(request).await {
            Ok(plan) => plan,
            Err(e) => {
                log::warn!(
                    "Detailed plan for {} unavailable, using fallback: {}",
                    request.selected_destination,
                    e
                );
                fallback_plan(request)
            }
        }
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

fn chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Models like to wrap JSON in a markdown fence.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn build_prompt(request: &DetailedPlanRequest) -> String {
    let cities = if request.selected_cities.is_empty() {
        request.selected_destination.clone()
    } else {
        request.selected_cities.join(", ")
    };

    format!(
        r#"
Create a detailed, ACTIONABLE travel plan in JSON format. This must be a realistic implementation guide, not generic advice.

**Travel Details:**
- Destination: {destination}
- Cities to visit: {cities}
- Duration: {duration} days
- Budget: {budget}
- Traveler: {gender}, {age}

**CRITICAL REQUIREMENTS - Must be SPECIFIC and ACTIONABLE:**
1. **Flights**: Real airline names, actual flight routes, current price ranges (USD), specific booking websites, optimal booking times
2. **Hotels**: ACTUAL hotel names with real addresses, current nightly rates, booking.com/expedia/hotels.com links, check-in/out procedures
3. **Transportation**: Specific transport companies, exact ticket prices, where to buy tickets, mobile apps to download, station names
4. **Daily Schedule**: Hour-by-hour itinerary with REAL business names, exact addresses, opening hours, ticket prices, advance booking requirements
5. **Restaurants**: ACTUAL restaurant names, specific addresses, phone numbers, price ranges, must-try dishes, reservation requirements
6. **Tours**: Real tour company names, specific tour packages, exact prices, booking URLs, meeting points, what's included
7. **Traffic/Navigation**: Best routes between locations, estimated travel times, traffic patterns, Google Maps links, local navigation apps
8. **Practical Actions**: Step-by-step visa application process, currency exchange locations, specific safety precautions, emergency contacts

**JSON Structure:**
{contract}

Make this as specific and actionable as possible with real business names, actual prices in USD, and practical booking information."#,
        destination = request.selected_destination,
        cities = cities,
        duration = request.travel_duration_days,
        budget = request.budget_category,
        gender = request.gender,
        age = request.age_range,
        contract = JSON_CONTRACT,
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Canned plan: 2000 total, two activities, a meal, a transit pass and one
/// route per day, for at most two weeks.
pub fn fallback_plan(request: &DetailedPlanRequest) -> DetailedTravelPlan {
    let duration = request.travel_duration_days.min(MAX_TRIP_DAYS);
    let days = duration.max(0) as u32;
    let average_over = duration.max(1) as f64;

    DetailedTravelPlan {
        summary: PlanSummary {
            total_budget: FALLBACK_TOTAL_BUDGET,
            daily_average: round_cents(FALLBACK_TOTAL_BUDGET / average_over),
            highlights: strings(&["Custom travel plan", "Local experiences", "Cultural immersion"]),
        },
        flights: FlightInfo {
            outbound: FlightOption {
                airlines: strings(&["Major airlines available"]),
                route: format!("Your location → {}", request.selected_destination),
                avg_price: 800.0,
                booking_tips: strings(&[
                    "Book 2-3 months in advance",
                    "Use comparison sites",
                    "Consider connecting flights",
                ]),
                options: Vec::new(),
            },
            internal: Vec::new(),
        },
        daily_itinerary: (1..=days)
            .map(|day| fallback_day(day, &request.selected_destination))
            .collect(),
        practical_info: PracticalInfo {
            visa: "Check visa requirements for your nationality".to_string(),
            currency: "Local currency".to_string(),
            tipping: "Check local tipping customs".to_string(),
            safety_tips: strings(&[
                "Keep copies of documents",
                "Stay aware of surroundings",
                "Use official transport",
            ]),
            emergency_numbers: EmergencyNumbers::default(),
        },
        ..Default::default()
    }
}

fn fallback_day(day: u32, city: &str) -> DayItinerary {
    DayItinerary {
        day,
        city: city.to_string(),
        activities: vec![
            PlannedActivity {
                time: "09:00".to_string(),
                activity: "Morning exploration".to_string(),
                location: "City center".to_string(),
                address: "Main city center area".to_string(),
                cost: 50.0,
                opening_hours: "24/7".to_string(),
                booking_info: "Walk-in available".to_string(),
                estimated_duration: "3 hours".to_string(),
                ..Default::default()
            },
            PlannedActivity {
                time: "14:00".to_string(),
                activity: "Afternoon cultural visit".to_string(),
                location: "Local attraction".to_string(),
                address: "Cultural district".to_string(),
                cost: 25.0,
                opening_hours: "9:00 AM - 6:00 PM".to_string(),
                booking_info: "Online booking recommended".to_string(),
                estimated_duration: "2 hours".to_string(),
                ..Default::default()
            },
        ],
        meals: vec![MealRecommendation {
            time: "12:00".to_string(),
            restaurant: "Local restaurant".to_string(),
            cuisine: "Traditional".to_string(),
            address: "City center".to_string(),
            price_range: "$15-25".to_string(),
            must_try_dishes: strings(&["Local specialty"]),
            reservation_required: false,
            ..Default::default()
        }],
        transportation: TransportationDay {
            method: "Public transport".to_string(),
            cost: 10.0,
            details: "Day pass recommended".to_string(),
            ticketing_info: "Available at stations".to_string(),
            mobile_app: "Local transit app".to_string(),
        },
        navigation: vec![NavigationInfo {
            from: "Hotel".to_string(),
            to: "City center".to_string(),
            route: "Main street".to_string(),
            estimated_time: "15 minutes".to_string(),
            traffic_notes: "Light morning traffic".to_string(),
            maps_link: String::new(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(duration: i32) -> DetailedPlanRequest {
        DetailedPlanRequest {
            selected_destination: "japan".to_string(),
            selected_cities: vec!["Tokyo".to_string(), "Kyoto".to_string()],
            travel_duration_days: duration,
            budget_category: "student".to_string(),
            gender: "female".to_string(),
            age_range: "18-25".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_travel_details_and_contract() {
        let prompt = build_prompt(&request(5));
        assert!(prompt.contains("- Destination: japan"));
        assert!(prompt.contains("- Cities to visit: Tokyo, Kyoto"));
        assert!(prompt.contains("- Duration: 5 days"));
        assert!(prompt.contains("- Traveler: female, 18-25"));
        assert!(prompt.contains("\"budgetBreakdown\""));
        assert!(prompt.contains("actual prices in USD"));
    }

    #[test]
    fn test_prompt_falls_back_to_destination_without_cities() {
        let mut input = request(5);
        input.selected_cities.clear();
        assert!(build_prompt(&input).contains("- Cities to visit: japan"));
    }

    #[test]
    fn test_fallback_plan_shape() {
        let plan = fallback_plan(&request(4));
        assert_eq!(plan.summary.total_budget, 2000.0);
        assert_eq!(plan.summary.daily_average, 500.0);
        assert_eq!(plan.daily_itinerary.len(), 4);
        for (index, day) in plan.daily_itinerary.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            assert_eq!(day.activities.len(), 2);
            assert_eq!(day.activities[0].cost, 50.0);
            assert_eq!(day.activities[1].cost, 25.0);
            assert_eq!(day.meals.len(), 1);
            assert_eq!(day.transportation.cost, 10.0);
            assert_eq!(day.navigation.len(), 1);
        }
    }

    #[test]
    fn test_fallback_plan_with_zero_days() {
        let plan = fallback_plan(&request(0));
        assert_eq!(plan.summary.daily_average, 2000.0);
        assert!(plan.daily_itinerary.is_empty());
    }

    #[test]
    fn test_fallback_plan_is_capped_at_two_weeks() {
        let plan = fallback_plan(&request(1_000_000));
        assert_eq!(plan.daily_itinerary.len(), 14);
        assert_eq!(plan.summary.daily_average, 142.86);
    }

    #[test]
    fn test_mask_key_by_characters() {
        assert_eq!(mask_key("sk-1234567890abcd"), "sk-1***abcd");
        assert_eq!(mask_key("ключ-ключ-ключ"), "ключ***ключ");
        assert_eq!(mask_key("é"), "***");
        assert_eq!(mask_key("12345678"), "***");
    }

    #[test]
    fn test_masked_api_key_reflects_configuration() {
        let service = service_for("http://127.0.0.1:9".to_string(), Some("sk-abcdefghijkl"));
        assert_eq!(service.masked_api_key().as_deref(), Some("sk-a***ijkl"));
        let service = service_for("http://127.0.0.1:9".to_string(), None);
        assert_eq!(service.masked_api_key(), None);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {} "), "{}");
    }

    #[test]
    fn test_chat_url() {
        assert_eq!(chat_url("http://x/v1/"), "http://x/v1/chat/completions");
        assert_eq!(
            chat_url("http://x/v1/chat/completions"),
            "http://x/v1/chat/completions"
        );
    }

    fn service_for(url: String, api_key: Option<&str>) -> DetailedPlanService {
        DetailedPlanService::new(PlannerConfig {
            api_key: api_key.map(str::to_string),
            base_url: url,
            ..Default::default()
        })
        .unwrap()
    }

    fn completion(content: &str) -> String {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] }).to_string()
    }

    #[actix_rt::test]
    async fn test_fetch_parses_model_plan() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion(
                "```json\n{\"summary\":{\"totalBudget\":1500,\"dailyAverage\":300,\"highlights\":[\"Fushimi Inari\"]}}\n```",
            ))
            .create_async()
            .await;

        let service = service_for(server.url(), Some("test-key"));
        let plan = service.fetch_detailed_plan(&request(5)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(plan.summary.total_budget, 1500.0);
        assert_eq!(plan.summary.highlights, vec!["Fushimi Inari"]);
        assert!(plan.daily_itinerary.is_empty());
    }

    #[actix_rt::test]
    async fn test_fetch_reports_each_failure() {
        let mut server = mockito::Server::new_async().await;
        let service = service_for(server.url(), Some("test-key"));

        let _error = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body(r#"{"error":{"message":"overloaded"}}"#)
            .create_async()
            .await;
        match service.fetch_detailed_plan(&request(3)).await {
            Err(PlanFetchError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        server.reset_async().await;

        let _empty = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion("   "))
            .create_async()
            .await;
        assert!(matches!(
            service.fetch_detailed_plan(&request(3)).await,
            Err(PlanFetchError::EmptyResponse)
        ));
        server.reset_async().await;

        let _prose = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion("Here is your plan: enjoy Japan!"))
            .create_async()
            .await;
        assert!(matches!(
            service.fetch_detailed_plan(&request(3)).await,
            Err(PlanFetchError::InvalidJson(_))
        ));
    }

    #[actix_rt::test]
    async fn test_generate_falls_back_without_api_key() {
        let service = service_for("http://127.0.0.1:9".to_string(), None);
        assert!(matches!(
            service.fetch_detailed_plan(&request(6)).await,
            Err(PlanFetchError::MissingApiKey)
        ));

        let plan = service.generate_detailed_plan(&request(6)).await;
        assert_eq!(plan.summary.total_budget, 2000.0);
        assert_eq!(plan.daily_itinerary.len(), 6);
    }

    #[actix_rt::test]
    async fn test_generate_falls_back_after_error_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body(r#"{"error":{"message":"overloaded"}}"#)
            .create_async()
            .await;

        let service = service_for(server.url(), Some("test-key"));
        let plan = service.generate_detailed_plan(&request(3)).await;

        mock.assert_async().await;
        assert_eq!(plan, fallback_plan(&request(3)));
        assert_eq!(plan.summary.total_budget, 2000.0);
        assert_eq!(plan.daily_itinerary.len(), 3);
    }

    #[actix_rt::test]
    async fn test_generate_falls_back_after_malformed_answer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion("{\"summary\": {\"totalBudget\": "))
            .create_async()
            .await;

        let service = service_for(server.url(), Some("test-key"));
        let plan = service.generate_detailed_plan(&request(5)).await;

        mock.assert_async().await;
        assert_eq!(plan.summary.total_budget, 2000.0);
        assert_eq!(plan.daily_itinerary.len(), 5);
    }

    #[actix_rt::test]
    async fn test_generate_falls_back_when_endpoint_is_unreachable() {
        let service = service_for("http://127.0.0.1:9".to_string(), Some("test-key"));
        assert!(matches!(
            service.fetch_detailed_plan(&request(2)).await,
            Err(PlanFetchError::Transport(_))
        ));

        let plan = service.generate_detailed_plan(&request(2)).await;
        assert_eq!(plan.summary.total_budget, 2000.0);
        assert_eq!(plan.daily_itinerary.len(), 2);
    }
}
