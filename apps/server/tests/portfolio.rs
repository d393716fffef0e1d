mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{body_json, register_user, request, spawn_app};

fn sample_portfolio() -> Value {
    json!({
        "equity": {
            "directStocks": [
                { "name": "ACME", "invested": 45000.0, "current": 50000.0 }
            ],
            "mutualFunds": [
                { "name": "Index Fund", "type": "flexicap", "invested": 10000.0, "current": 12000.0 }
            ]
        },
        "nonEquity": {
            "cash": { "invested": 5000.0, "current": 5000.0 },
            "commodities": {
                "gold": { "invested": 2000.0, "current": 2500.0 }
            }
        },
        "emergency": {
            "invested": { "investedAmount": 3000.0, "currentAmount": 3000.0 },
            "bankAccount": { "investedAmount": 1000.0, "currentAmount": 1000.0 }
        }
    })
}

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-9)
}

#[tokio::test]
async fn current_returns_not_found_when_no_snapshot_exists() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let response = request(&app, "GET", "/api/portfolio/current", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No portfolio found");
}

#[tokio::test]
async fn create_derives_gains_and_totals() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let response = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(sample_portfolio()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;

    let stock = &body["equity"]["directStocks"][0];
    assert!(approx(&stock["gain"], 5000.0));
    assert!(approx(&stock["gainPercentage"], 5000.0 / 45000.0 * 100.0));

    let fund = &body["equity"]["mutualFunds"][0];
    assert!(approx(&fund["gain"], 2000.0));
    assert_eq!(fund["type"], "flexicap");

    assert!(approx(&body["equity"]["total"], 62000.0));
    assert!(approx(&body["nonEquity"]["total"], 7500.0));
    assert!(approx(&body["nonEquity"]["totalInvested"], 7000.0));
    assert!(approx(&body["emergency"]["total"], 4000.0));
    assert!(approx(&body["emergency"]["totalInvested"], 4000.0));

    assert!(approx(&body["grandTotal"], 73500.0));
    assert!(approx(&body["invested"], 66000.0));
    assert!(approx(&body["currentValue"], 73500.0));
}

#[tokio::test]
async fn create_ignores_client_supplied_derived_values() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let mut payload = sample_portfolio();
    payload["equity"]["total"] = json!(999999.0);
    payload["equity"]["directStocks"][0]["gain"] = json!(-1.0);
    payload["grandTotal"] = json!(1.0);

    let response = request(&app, "POST", "/api/portfolio", Some(&token), Some(payload)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(approx(&body["equity"]["total"], 62000.0));
    assert!(approx(&body["equity"]["directStocks"][0]["gain"], 5000.0));
    assert!(approx(&body["grandTotal"], 73500.0));
}

#[tokio::test]
async fn current_returns_the_latest_snapshot_and_history_is_newest_first() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let first = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(json!({ "nonEquity": { "cash": { "invested": 100.0, "current": 100.0 } } })),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_id = body_json(first).await["id"].as_str().unwrap().to_string();

    // Keep created_at strictly increasing between the two snapshots.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let second = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(json!({ "nonEquity": { "cash": { "invested": 200.0, "current": 200.0 } } })),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let second_id = body_json(second).await["id"].as_str().unwrap().to_string();

    let current = request(&app, "GET", "/api/portfolio/current", Some(&token), None).await;
    assert_eq!(current.status(), StatusCode::OK);
    assert_eq!(body_json(current).await["id"], second_id.as_str());

    let history = request(&app, "GET", "/api/portfolio/history", Some(&token), None).await;
    assert_eq!(history.status(), StatusCode::OK);
    let rows = body_json(history).await;
    let ids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![second_id.as_str(), first_id.as_str()]);
}

#[tokio::test]
async fn update_replaces_leaves_and_recomputes_derived_values() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let created = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(sample_portfolio()),
    )
    .await;
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let response = request(
        &app,
        "PUT",
        &format!("/api/portfolio/{id}"),
        Some(&token),
        Some(json!({
            "equity": {
                "directStocks": [
                    { "name": "ACME", "invested": 45000.0, "current": 40000.0 }
                ]
            }
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id.as_str());
    assert!(approx(&body["equity"]["directStocks"][0]["gain"], -5000.0));
    // Leaves absent from the payload are gone, not carried over.
    assert_eq!(body["equity"]["mutualFunds"].as_array().unwrap().len(), 0);
    assert!(approx(&body["nonEquity"]["total"], 0.0));
    assert!(approx(&body["grandTotal"], 40000.0));
}

#[tokio::test]
async fn foreign_and_unknown_snapshot_ids_are_indistinguishable() {
    let app = spawn_app().await;
    let alice = register_user(&app, "alice@example.com", "hunter22").await;
    let bob = register_user(&app, "bob@example.com", "hunter22").await;

    let created = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&alice),
        Some(sample_portfolio()),
    )
    .await;
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let foreign_update = request(
        &app,
        "PUT",
        &format!("/api/portfolio/{id}"),
        Some(&bob),
        Some(json!({})),
    )
    .await;
    assert_eq!(foreign_update.status(), StatusCode::NOT_FOUND);

    let foreign_delete = request(
        &app,
        "DELETE",
        &format!("/api/portfolio/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(foreign_delete.status(), StatusCode::NOT_FOUND);

    let unknown_delete = request(
        &app,
        "DELETE",
        "/api/portfolio/no-such-id",
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(unknown_delete.status(), StatusCode::NOT_FOUND);

    // Alice's snapshot survived the foreign delete attempt.
    let current = request(&app, "GET", "/api/portfolio/current", Some(&alice), None).await;
    assert_eq!(current.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_removes_the_snapshot() {
    let app = spawn_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let created = request(
        &app,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(sample_portfolio()),
    )
    .await;
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let response = request(
        &app,
        "DELETE",
        &format!("/api/portfolio/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Portfolio deleted");

    let current = request(&app, "GET", "/api/portfolio/current", Some(&token), None).await;
    assert_eq!(current.status(), StatusCode::NOT_FOUND);
}
