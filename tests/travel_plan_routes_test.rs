mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::TestApp;
use travel_planner_api::{db::store::TravelStore, services::detailed_plan_service::PlannerConfig};

fn japan_request(days: i32) -> Value {
    json!({
        "preferences": {
            "budgetCategory": "student",
            "travelDurationDays": days,
            "selectedDestination": "japan"
        },
        "userId": 7
    })
}

#[actix_rt::test]
async fn test_generate_plan_from_destination_slug() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .set_json(&japan_request(3))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let plan: Value = test::read_body_json(resp).await;
    assert_eq!(plan["title"], "Japan Adventure - student Budget");
    assert_eq!(plan["status"], "draft");
    assert_eq!(plan["totalBudget"], 120.0);
    assert_eq!(plan["destination"]["name"], "Japan");
    assert_eq!(plan["dailyItinerary"].as_array().map(Vec::len), Some(3));
    assert!(plan.get("id").is_none());

    let breakdown = &plan["budgetBreakdown"];
    let sum: f64 = ["accommodation", "transportation", "food", "activities", "misc"]
        .iter()
        .filter_map(|key| breakdown[*key].as_f64())
        .sum();
    assert!((sum - 120.0).abs() < 0.01);
}

#[actix_rt::test]
async fn test_generate_prefers_explicit_destination_id() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let mut request = japan_request(2);
    request["destinationId"] = json!(6);
    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .set_json(&request)
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(plan["destination"]["name"], "France");
}

#[actix_rt::test]
async fn test_generate_rejects_unknown_destination() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .set_json(&json!({ "destinationId": 404 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Destination not found");

    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .set_json(&json!({ "preferences": { "budgetCategory": "student" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_plan_lifecycle() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .set_json(&japan_request(4))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan")
        .set_json(&json!({
            "title": "Golden week",
            "userId": 7,
            "travelPlan": generated
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let saved: Value = test::read_body_json(resp).await;
    let id = saved["id"].as_i64().expect("saved plan has an id");
    assert_eq!(saved["title"], "Golden week");
    assert_eq!(saved["totalBudget"], generated["totalBudget"]);
    assert_eq!(saved["dailyItinerary"], generated["dailyItinerary"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/travelplan/{}", id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["destination"]["name"], "Japan");
    assert_eq!(fetched["status"], "draft");

    let req = test::TestRequest::get()
        .uri("/api/travelplan/user/7")
        .to_request();
    let plans: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(plans.len(), 1);

    let req = test::TestRequest::put()
        .uri(&format!("/api/travelplan/{}", id))
        .set_json(&json!({
            "status": "confirmed",
            "startDate": "2026-05-01",
            "endDate": "2026-05-05"
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["title"], "Golden week");
    assert_eq!(updated["startDate"], "2026-05-01");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/travelplan/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let children = test_app.state.store.plan_children(id).await.unwrap();
    assert!(children.activities.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/travelplan/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/travelplan/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_save_requires_title() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan")
        .set_json(&json!({ "title": "  ", "travelPlan": { "title": "Trip" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Title is required");
}

#[actix_rt::test]
async fn test_update_missing_or_invalid() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/travelplan/12345")
        .set_json(&json!({ "title": "Nowhere" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/travelplan/12345")
        .set_json(&json!({ "status": "archived" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_detailed_plan_falls_back_without_model() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/detailed")
        .set_json(&json!({
            "selectedDestination": "japan",
            "selectedCities": ["Tokyo", "Kyoto"],
            "travelDurationDays": 4,
            "budgetCategory": "comfortable"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let plan: Value = test::read_body_json(resp).await;
    assert_eq!(plan["summary"]["totalBudget"], 2000.0);
    assert_eq!(plan["dailyItinerary"].as_array().map(Vec::len), Some(4));
}

#[actix_rt::test]
async fn test_detailed_plan_uses_model_answer() {
    let mut server = mockito::Server::new_async().await;
    let content = r#"{"summary":{"totalBudget":3100,"dailyAverage":620,"highlights":["Arashiyama"]}}"#;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "choices": [{ "message": { "content": content } }] }).to_string(),
        )
        .create_async()
        .await;

    let test_app = TestApp::with_planner(PlannerConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.url(),
        ..Default::default()
    })
    .await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/detailed")
        .set_json(&json!({ "selectedDestination": "japan", "travelDurationDays": 5 }))
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;

    mock.assert_async().await;
    assert_eq!(plan["summary"]["totalBudget"], 3100.0);
    assert_eq!(plan["summary"]["highlights"][0], "Arashiyama");
}

#[actix_rt::test]
async fn test_detailed_plan_rejects_too_many_cities() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/detailed")
        .set_json(&json!({
            "selectedDestination": "japan",
            "selectedCities": ["Tokyo", "Kyoto", "Osaka", "Nara"],
            "travelDurationDays": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_optimize_budget() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/optimize")
        .set_json(&json!({
            "budgetCategory": "student",
            "travelDurationDays": 5,
            "selectedDestination": "japan"
        }))
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(plan["dailyBudget"], 25.0);
    assert_eq!(plan["totalBudget"], 125.0);
    assert_eq!(plan["dailyItinerary"].as_array().map(Vec::len), Some(5));

    let breakdown = &plan["costBreakdown"];
    let parts: f64 = [
        "accommodation",
        "transportation",
        "food",
        "activities",
        "shopping",
        "miscellaneous",
    ]
    .iter()
    .filter_map(|key| breakdown[*key].as_f64())
    .sum();
    assert!((parts - breakdown["total"].as_f64().unwrap()).abs() < 0.01);

    let days: Vec<u64> = plan["preparationChecklist"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["daysBeforeTrip"].as_u64())
        .collect();
    assert!(days.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[actix_rt::test]
async fn test_optimize_accepts_advanced_questionnaire() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/optimize")
        .set_json(&json!({
            "ageRange": "30-39",
            "budget": "student",
            "duration": 10,
            "continent": "asia",
            "selectedDestination": "japan"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let plan: Value = test::read_body_json(resp).await;
    assert_eq!(plan["dailyBudget"], 25.0);
    assert_eq!(plan["totalBudget"], 250.0);
    assert_eq!(plan["dailyItinerary"].as_array().map(Vec::len), Some(7));
}

#[actix_rt::test]
async fn test_detailed_plan_rejects_overlong_trip() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/detailed")
        .set_json(&json!({
            "selectedDestination": "japan",
            "travelDurationDays": 1_000_000
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Trips are limited to 14 days, got 1000000");
}

#[actix_rt::test]
async fn test_malformed_body_gets_message() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/travelplan/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"preferences\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .is_some_and(|message| message.starts_with("Invalid request body")));

    let req = test::TestRequest::post()
        .uri("/api/travelplan/detailed")
        .set_json(&json!({ "travelDurationDays": "a week" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}
