mod common;

use axum::http::{Method, StatusCode};
use chrono::DateTime;
use serde_json::json;

use common::{num, TestApp};

fn ganga() -> serde_json::Value {
    json!({
        "name": "Ganga",
        "breed": "Holstein",
        "dateOfJoining": "2020-06-01",
        "gender": "female"
    })
}

#[tokio::test]
async fn cattle_lifecycle_round_trip() {
    let app = TestApp::new();

    let created = app.create("cattle", ganga()).await;
    let id = created["_id"].as_str().expect("generated id").to_string();
    assert_eq!(created["name"], "Ganga");
    assert_eq!(created["status"], "active");
    assert_eq!(created["category"], "cow");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = app.call(Method::GET, &format!("/api/cattle/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["success"], true);
    assert_eq!(fetched["data"]["_id"], id.as_str());
    assert!(fetched["meta"]["timestamp"].is_string());

    let (status, updated) = app
        .call(
            Method::PUT,
            &format!("/api/cattle/{}", id),
            Some(json!({"status": "pregnant", "_id": "hijacked", "createdAt": "1999-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated = &updated["data"];
    assert_eq!(updated["_id"], id.as_str());
    assert_eq!(updated["status"], "pregnant");
    assert_eq!(updated["name"], "Ganga", "fields absent from the body are kept");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let before = DateTime::parse_from_rfc3339(created["updatedAt"].as_str().unwrap()).unwrap();
    let after = DateTime::parse_from_rfc3339(updated["updatedAt"].as_str().unwrap()).unwrap();
    assert!(after > before);

    let (status, deleted) = app.call(Method::DELETE, &format!("/api/cattle/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["message"], "Cattle deleted successfully");

    let (status, missing) = app.call(Method::GET, &format!("/api/cattle/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], false);
    assert_eq!(missing["error"], "Cattle not found");
}

#[tokio::test]
async fn missing_required_fields_return_static_message() {
    let app = TestApp::new();

    let (status, body) = app
        .call(Method::POST, "/api/cattle", Some(json!({"name": "Ganga"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Name, breed, and date of joining are required");

    let (status, body) = app
        .call(Method::POST, "/api/milk", Some(json!({"quantity": 10})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cattle ID and date are required");

    let (status, body) = app
        .call(Method::POST, "/api/expenses", Some(json!({"date": "2024-11-20", "category": "feed"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Date, category, and amount are required");
}

#[tokio::test]
async fn malformed_input_is_a_bad_request() {
    let app = TestApp::new();

    let response = app.request_raw(Method::POST, "/api/cattle", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["success"], false);

    let (status, _) = app
        .call(
            Method::POST,
            "/api/cattle",
            Some(json!({"name": "Ganga", "breed": "Holstein", "dateOfJoining": "yesterday"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(Method::POST, "/api/cattle", Some(json!(["not", "an", "object"])))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_are_not_found_for_every_verb() {
    let app = TestApp::new();

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({"quantity": 5}))),
        (Method::DELETE, None),
    ] {
        let (status, json) = app.call(method, "/api/feed/does-not-exist", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Feed not found");
    }
}

#[tokio::test]
async fn milk_total_is_recomputed_on_create_and_price_only_update() {
    let app = TestApp::new();
    let cow = app.create("cattle", ganga()).await;

    let milk = app
        .create(
            "milk",
            json!({
                "cattleId": cow["_id"],
                "date": "2024-11-23",
                "quantity": 12,
                "pricePerLiter": 45,
                "totalAmount": 1
            }),
        )
        .await;
    assert_eq!(num(&milk["totalAmount"]), 540.0);

    let (status, updated) = app
        .call(
            Method::PUT,
            &format!("/api/milk/{}", milk["_id"].as_str().unwrap()),
            Some(json!({"pricePerLiter": 50})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&updated["data"]["totalAmount"]), 600.0);
    assert_eq!(num(&updated["data"]["quantity"]), 12.0);
}

#[tokio::test]
async fn sale_total_follows_liters_and_price() {
    let app = TestApp::new();
    let sale = app
        .create(
            "sales",
            json!({"date": "2024-11-23", "quantityInLiters": 50, "pricePerLiter": 45}),
        )
        .await;
    assert_eq!(num(&sale["totalAmount"]), 2250.0);
    assert_eq!(sale["paymentStatus"], "pending");
}

#[tokio::test]
async fn milk_listing_joins_names_and_filters() {
    let app = TestApp::new();
    let ganga = app.create("cattle", ganga()).await;
    let lakshmi = app
        .create(
            "cattle",
            json!({"name": "Lakshmi", "breed": "Murrah", "dateOfJoining": "2020-01-10"}),
        )
        .await;

    for (cow, date, session) in [
        (&ganga, "2024-11-22", "morning"),
        (&lakshmi, "2024-11-23", "evening"),
        (&ganga, "2024-11-23", "morning"),
    ] {
        app.create(
            "milk",
            json!({"cattleId": cow["_id"], "date": date, "session": session, "quantity": 10}),
        )
        .await;
    }
    app.create(
        "milk",
        json!({"cattleId": "sold-last-year", "date": "2024-11-21", "quantity": 4}),
    )
    .await;

    let (status, all) = app.call(Method::GET, "/api/milk", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows: Vec<(String, String)> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["date"].as_str().unwrap().to_string(),
                r["cattleName"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("2024-11-23".to_string(), "Ganga".to_string()),
            ("2024-11-23".to_string(), "Lakshmi".to_string()),
            ("2024-11-22".to_string(), "Ganga".to_string()),
            ("2024-11-21".to_string(), "sold-last-year".to_string()),
        ]
    );

    let (_, by_date) = app.call(Method::GET, "/api/milk?date=2024-11-23", None).await;
    assert_eq!(by_date["data"].as_array().unwrap().len(), 2);

    let uri = format!("/api/milk?cattleId={}", ganga["_id"].as_str().unwrap());
    let (_, by_cow) = app.call(Method::GET, &uri, None).await;
    assert_eq!(by_cow["data"].as_array().unwrap().len(), 2);

    let (status, _) = app.call(Method::GET, "/api/milk?date=23-11-2024", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn herd_tree_nests_calves_under_mothers() {
    let app = TestApp::new();
    let ganga = app.create("cattle", ganga()).await;
    app.create(
        "cattle",
        json!({
            "name": "Gauri",
            "breed": "Holstein",
            "dateOfJoining": "2024-05-15",
            "motherId": ganga["_id"]
        }),
    )
    .await;

    let (status, tree) = app.call(Method::GET, "/api/cattle/tree", None).await;
    assert_eq!(status, StatusCode::OK);
    let roots = tree["data"]["roots"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "Ganga");
    assert_eq!(roots[0]["children"][0]["name"], "Gauri");
}

#[tokio::test]
async fn responses_echo_request_id() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .uri("/api/status")
        .header("x-request-id", "trace-me")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app_router(&app), request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me");
    let body = common::response_json(response).await;
    assert_eq!(body["meta"]["requestId"], "trace-me");
    assert_eq!(body["data"]["service"], "dairy-farm-api");
}

fn app_router(app: &TestApp) -> axum::Router {
    dairy_farm_api::build_router(app.state.clone())
}

#[tokio::test]
async fn out_of_range_amounts_are_rejected_with_an_envelope() {
    let app = TestApp::new();

    for (collection, body) in [
        (
            "milk",
            json!({"cattleId": "c1", "date": "2024-11-23", "quantity": 1e28, "pricePerLiter": 40}),
        ),
        (
            "sales",
            json!({"date": "2024-11-23", "quantityInLiters": 50, "pricePerLiter": 1e20}),
        ),
        (
            "feed-transactions",
            json!({"feedId": "f1", "transactionType": "purchase", "date": "2024-11-23", "quantity": 1e28, "pricePerUnit": 5}),
        ),
        (
            "waste",
            json!({"date": "2024-11-18", "wasteType": "feed", "quantity": 5e28}),
        ),
        (
            "feed",
            json!({"name": "Maize Fodder", "feedType": "green-fodder", "currentStock": 1e28, "pricePerUnit": 40}),
        ),
    ] {
        let (status, body) = app
            .call(Method::POST, &format!("/api/{}", collection), Some(body))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}: {}", collection, body);
        assert_eq!(body["success"], false);
    }

    let (_, all) = app.call(Method::GET, "/api/milk", None).await;
    assert!(all["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_cannot_push_a_total_out_of_range() {
    let app = TestApp::new();
    let milk = app
        .create(
            "milk",
            json!({"cattleId": "c1", "date": "2024-11-23", "quantity": 12, "pricePerLiter": 45}),
        )
        .await;
    let uri = format!("/api/milk/{}", milk["_id"].as_str().unwrap());

    let (status, body) = app
        .call(Method::PUT, &uri, Some(json!({"quantity": 1e28})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, stored) = app.call(Method::GET, &uri, None).await;
    assert_eq!(num(&stored["data"]["totalAmount"]), 540.0);
}
