//! 广播管线集成测试 - 提交 → 扇出

mod common;

use http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{app, body_json, json_request, test_state};
use shared::message::BusMessage;

#[tokio::test]
async fn create_broadcasts_one_new_order_to_each_subscriber() {
    let (state, _dir) = test_state().await;

    let (_a, mut rx_a) = state.bus.subscribe();
    let (_b, mut rx_b) = state.bus.subscribe();

    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({ "table_code": "TABLE01", "items": [{ "menu_item_id": 1, "quantity": 1 }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    for rx in [&mut rx_a, &mut rx_b] {
        let msg = rx.try_recv().expect("subscriber should receive one event");
        assert!(matches!(msg, BusMessage::NewOrder { .. }));
        assert_eq!(msg.order().id, id);
        assert!(rx.try_recv().is_err(), "exactly one event expected");
    }

    // 广播之后才注册的订阅者什么也收不到 (无回放)
    let (_late, mut rx_late) = state.bus.subscribe();
    assert!(rx_late.try_recv().is_err());
}

#[tokio::test]
async fn every_update_broadcasts_even_a_noop_patch() {
    let (state, _dir) = test_state().await;

    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({ "table_code": "TABLE02", "items": [{ "menu_item_id": 2, "quantity": 1 }] }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let (_s, mut rx) = state.bus.subscribe();

    let response = app(&state)
        .oneshot(json_request("PATCH", &format!("/api/orders/{id}"), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let msg = rx.try_recv().expect("noop patch still broadcasts");
    assert!(matches!(msg, BusMessage::OrderUpdated { .. }));
    assert_eq!(msg.order().id, id);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn failed_creation_broadcasts_nothing() {
    let (state, _dir) = test_state().await;

    let (_s, mut rx) = state.bus.subscribe();

    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({ "table_code": "TABLE01", "items": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(rx.try_recv().is_err(), "failed creation must not broadcast");
}

#[tokio::test]
async fn gone_subscriber_does_not_break_commit_or_peers() {
    let (state, _dir) = test_state().await;

    let (_gone, rx_gone) = state.bus.subscribe();
    let (_live, mut rx_live) = state.bus.subscribe();
    drop(rx_gone);

    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({ "table_code": "TABLE03", "items": [{ "menu_item_id": 3, "quantity": 1 }] }),
        ))
        .await
        .unwrap();

    // 提交方不受影响，其他订阅者照常收到
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(rx_live.try_recv().is_ok());
}

#[tokio::test]
async fn broadcast_carries_fully_hydrated_snapshot() {
    let (state, _dir) = test_state().await;

    let (_s, mut rx) = state.bus.subscribe();

    app(&state)
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({
                "table_code": "TABLE01",
                "items": [{ "menu_item_id": 1, "quantity": 2, "notes": "extra sauce" }]
            }),
        ))
        .await
        .unwrap();

    let msg = rx.try_recv().unwrap();
    let order = msg.order();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].name, "Hot Burger");
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[0].notes.as_deref(), Some("extra sauce"));
}
