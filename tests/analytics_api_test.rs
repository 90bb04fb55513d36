mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{num, TestApp};

/// A small November ledger: one cow, three milkings, two feeds, sales,
/// expenses, a waste entry and an open treatment.
async fn farm() -> (TestApp, Value) {
    let app = TestApp::new();
    let ganga = app
        .create(
            "cattle",
            json!({"name": "Ganga", "breed": "Holstein", "dateOfJoining": "2020-06-01"}),
        )
        .await;

    for (date, session, quantity, price) in [
        ("2024-10-31", "morning", 5, 40),
        ("2024-11-22", "morning", 10, 40),
        ("2024-11-23", "evening", 8, 50),
    ] {
        app.create(
            "milk",
            json!({
                "cattleId": ganga["_id"],
                "date": date,
                "session": session,
                "quantity": quantity,
                "pricePerLiter": price
            }),
        )
        .await;
    }

    let maize = app
        .create(
            "feed",
            json!({
                "name": "Maize Fodder",
                "feedType": "green-fodder",
                "currentStock": 500,
                "minimumStock": 100,
                "averageDailyConsumption": 50,
                "pricePerUnit": 5
            }),
        )
        .await;
    let pellets = app
        .create(
            "feed",
            json!({
                "name": "Cattle Feed Pellets",
                "feedType": "concentrate",
                "currentStock": 40,
                "minimumStock": 50,
                "pricePerUnit": 35
            }),
        )
        .await;

    app.create(
        "feed-transactions",
        json!({"feedId": maize["_id"], "transactionType": "purchase", "date": "2024-11-20", "quantity": 500, "pricePerUnit": 5}),
    )
    .await;
    app.create(
        "feed-transactions",
        json!({"feedId": maize["_id"], "transactionType": "consumption", "cattleId": ganga["_id"], "date": "2024-11-22", "quantity": 25, "pricePerUnit": 5}),
    )
    .await;
    app.create(
        "feed-transactions",
        json!({"feedId": pellets["_id"], "transactionType": "consumption", "date": "2024-11-23", "quantity": 10, "pricePerUnit": 35}),
    )
    .await;

    app.create(
        "sales",
        json!({"date": "2024-11-23", "quantityInLiters": 50, "pricePerLiter": 45}),
    )
    .await;
    app.create(
        "expenses",
        json!({"date": "2024-11-20", "category": "feed", "amount": 2500}),
    )
    .await;
    app.create(
        "expenses",
        json!({"date": "2024-11-10", "category": "electricity", "amount": 3500}),
    )
    .await;
    app.create(
        "waste",
        json!({"date": "2024-11-18", "wasteType": "feed", "quantity": 5, "estimatedLoss": 175}),
    )
    .await;

    let medicine = app
        .create(
            "medicine",
            json!({"medicineName": "Oxytetracycline", "currentStock": 8, "minimumStock": 3}),
        )
        .await;
    app.create(
        "medicine-application",
        json!({
            "cattleId": ganga["_id"],
            "medicineId": medicine["_id"],
            "treatmentDate": "2024-11-15",
            "reasonForTreatment": "Respiratory infection",
            "followUpDate": "2024-11-22"
        }),
    )
    .await;

    (app, ganga)
}

async fn report(app: &TestApp, uri: &str) -> Value {
    let (status, body) = app.call(Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "{} failed: {}", uri, body);
    assert_eq!(body["success"], true);
    body["data"].clone()
}

#[tokio::test]
async fn milk_report_aggregates_inside_window() {
    let (app, _) = farm().await;
    let data = report(&app, "/api/analytics/milk?startDate=2024-11-21&endDate=2024-11-23").await;

    assert_eq!(num(&data["totalQuantity"]), 18.0);
    assert_eq!(num(&data["totalRevenue"]), 800.0);
    assert_eq!(num(&data["averagePerDay"]), 9.0);
    assert_eq!(data["recordCount"], 2);
    assert_eq!(num(&data["bySession"]["morning"]), 10.0);
    assert_eq!(num(&data["bySession"]["evening"]), 8.0);
    assert_eq!(data["byCattle"][0]["label"], "Ganga");
    assert_eq!(num(&data["byCattle"][0]["total"]), 18.0);

    let daily = data["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0]["date"], "2024-11-22");
    assert_eq!(num(&daily[1]["revenue"]), 400.0);

    assert_eq!(data["records"][0]["cattleName"], "Ganga");
    assert_eq!(data["display"]["totalQuantity"], "18.0 L");
    assert_eq!(data["display"]["totalRevenue"], "₹800");
}

#[tokio::test]
async fn milk_report_session_filter_and_empty_window() {
    let (app, _) = farm().await;
    let evening = report(&app, "/api/analytics/milk?session=evening").await;
    assert_eq!(num(&evening["totalQuantity"]), 8.0);

    let empty = report(&app, "/api/analytics/milk?startDate=2023-01-01&endDate=2023-01-31").await;
    assert_eq!(num(&empty["totalQuantity"]), 0.0);
    assert_eq!(empty["recordCount"], 0);
    assert!(empty["daily"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn feed_report_splits_inventory_and_consumption() {
    let (app, _) = farm().await;
    let data = report(&app, "/api/analytics/feed?startDate=2024-11-21&endDate=2024-11-23").await;

    assert_eq!(data["inventory"].as_array().unwrap().len(), 2);
    assert_eq!(num(&data["totalStockValue"]), 3900.0);
    assert_eq!(data["lowStockCount"], 1);
    let maize = data["inventory"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["name"] == "Maize Fodder")
        .unwrap();
    assert_eq!(maize["lowStock"], false);
    assert_eq!(num(&maize["daysOfStockLeft"]), 10.0);

    let consumption = &data["consumption"];
    assert_eq!(num(&consumption["quantity"]), 35.0);
    assert_eq!(num(&consumption["cost"]), 475.0);
    assert_eq!(consumption["count"], 2);
    let labels: Vec<&str> = consumption["byCattle"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"Unknown"));
    assert!(labels.contains(&"Ganga"));

    let concentrate = report(&app, "/api/analytics/feed?feedType=concentrate").await;
    assert_eq!(concentrate["inventory"].as_array().unwrap().len(), 1);
    assert_eq!(concentrate["consumption"]["count"], 1);
    assert_eq!(concentrate["consumption"]["byFeed"][0]["label"], "Cattle Feed Pellets");
}

#[tokio::test]
async fn waste_report_totals_by_type() {
    let (app, _) = farm().await;
    let data = report(&app, "/api/analytics/waste").await;
    assert_eq!(num(&data["totalQuantity"]), 5.0);
    assert_eq!(num(&data["totalEstimatedLoss"]), 175.0);
    assert_eq!(num(&data["byType"]["feed"]), 5.0);
    assert_eq!(data["display"]["totalEstimatedLoss"], "₹175");
}

#[tokio::test]
async fn profit_report_includes_milk_and_sales_revenue() {
    let (app, _) = farm().await;
    let data = report(&app, "/api/analytics/profit?startDate=2024-11-01&endDate=2024-11-30").await;

    let summary = &data["summary"];
    assert_eq!(num(&summary["revenue"]), 3050.0);
    assert_eq!(num(&summary["expense"]), 6000.0);
    assert_eq!(num(&summary["net"]), -2950.0);
    assert_eq!(summary["positive"], false);
    assert_eq!(num(&data["salesRevenue"]), 2250.0);
    assert_eq!(num(&data["milkRevenue"]), 800.0);
    assert_eq!(num(&data["expensesByCategory"]["electricity"]), 3500.0);
    assert_eq!(data["display"]["net"], "-₹2,950");

    let all_time = report(&app, "/api/analytics/profit").await;
    let months: Vec<&str> = all_time["monthly"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["2024-10", "2024-11"]);
    assert_eq!(num(&all_time["monthly"][0]["revenue"]), 200.0);
}

#[tokio::test]
async fn dashboard_tiles_and_alerts() {
    let (app, _) = farm().await;
    let data = report(&app, "/api/analytics/dashboard?date=2024-11-24").await;

    assert_eq!(data["yesterday"]["window"]["start"], "2024-11-23");
    assert_eq!(data["yesterday"]["milk"]["total"], "8.0 L");
    assert_eq!(data["yesterday"]["profit"]["total"], "+₹2,650");
    assert_eq!(data["yesterday"]["profit"]["positive"], true);

    let weekly = &data["weekly"];
    assert_eq!(weekly["window"]["start"], "2024-11-18");
    assert_eq!(weekly["milk"]["total"], "18.0 L");
    let milk_details: Vec<&str> = weekly["milk"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(milk_details, vec!["Morning: 10.0 L", "Evening: 8.0 L", "Rate: ₹44/L"]);
    assert_eq!(weekly["waste"]["total"], "5.0 kg");
    assert_eq!(data["monthly"]["window"]["start"], "2024-10-26");

    let alerts = data["alerts"].as_array().unwrap();
    let badges: Vec<&str> = alerts.iter().map(|a| a["badge"].as_str().unwrap()).collect();
    assert_eq!(badges, vec!["FOLLOW-UP", "LOW STOCK"]);
    assert_eq!(alerts[0]["kind"], "critical");
    assert!(alerts[1]["message"].as_str().unwrap().starts_with("Cattle Feed Pellets"));

    let later = report(&app, "/api/analytics/dashboard?date=2024-11-30").await;
    let badges: Vec<&str> = later["alerts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["badge"].as_str().unwrap())
        .collect();
    assert!(badges.contains(&"MISSING"));
}

#[tokio::test]
async fn invalid_report_queries_are_rejected() {
    let (app, _) = farm().await;
    for uri in [
        "/api/analytics/milk?startDate=2024-11-30&endDate=2024-11-01",
        "/api/analytics/milk?session=noon",
        "/api/analytics/profit?startDate=not-a-date",
        "/api/analytics/dashboard?date=2024-13-01",
    ] {
        let (status, body) = app.call(Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn reports_survive_extreme_stored_values() {
    let (app, _) = farm().await;

    // Written straight to storage, as legacy rows would be
    for (id, date) in [("w-big-1", "2024-11-22"), ("w-big-2", "2024-11-23")] {
        let mut waste: dairy_farm_api::models::Waste = serde_json::from_value(json!({
            "date": date,
            "wasteType": "feed",
            "quantity": 5e28,
            "estimatedLoss": 5e28
        }))
        .unwrap();
        waste.meta.id = id.to_string();
        app.state.repositories.waste.insert(waste).await.unwrap();
    }

    let data = report(&app, "/api/analytics/waste").await;
    assert!(num(&data["totalQuantity"]) > 7.0e28);
    report(&app, "/api/analytics/dashboard?date=2024-11-24").await;
    report(&app, "/api/analytics/profit").await;
}
