//! 访问码与菜单接口集成测试

mod common;

use http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{app, body_json, get_request, json_request, test_state};

#[tokio::test]
async fn table_code_validation() {
    let (state, _dir) = test_state().await;

    // 有效桌码 (小写也接受，统一转大写匹配)
    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/auth/validate",
            json!({ "code": "table01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["table_number"], "Table 1");
    assert_eq!(body["code"], "TABLE01");

    // 无效桌码
    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/auth/validate",
            json!({ "code": "NOPE999" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 缺失 code 字段
    let response = app(&state)
        .oneshot(json_request("POST", "/api/auth/validate", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn staff_code_validation() {
    let (state, _dir) = test_state().await;

    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/auth/staff",
            json!({ "code": "ADMIN123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["name"], "Admin");

    // 桌码不能当员工码用
    let response = app(&state)
        .oneshot(json_request(
            "POST",
            "/api/auth/staff",
            json!({ "code": "TABLE01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn menu_is_grouped_by_category() {
    let (state, _dir) = test_state().await;

    let response = app(&state).oneshot(get_request("/api/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let menu = body_json(response).await;

    assert_eq!(menu["Burgers"].as_array().unwrap().len(), 4);
    assert_eq!(menu["Desserts"].as_array().unwrap().len(), 2);
    assert_eq!(menu["Burgers"][0]["name"], "Hot Burger");
    assert_eq!(menu["Burgers"][0]["price"].as_f64().unwrap(), 10.5);
}

#[tokio::test]
async fn delisted_items_are_hidden_from_menu() {
    let (state, _dir) = test_state().await;

    sqlx::query("UPDATE menu_items SET available = 0 WHERE category = 'Desserts'")
        .execute(state.pool())
        .await
        .unwrap();

    let response = app(&state).oneshot(get_request("/api/menu")).await.unwrap();
    let menu = body_json(response).await;
    assert!(menu.get("Desserts").is_none());
    assert_eq!(menu["Burgers"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (state, _dir) = test_state().await;

    let response = app(&state).oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["subscribers"], 0);
}
