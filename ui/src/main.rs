use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    service_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let service_url =
        std::env::var("SERVICE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;

    let state = AppState {
        service_url: service_url.trim_end_matches('/').to_string(),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/product", get(api_list).post(api_create))
        .route(
            "/api/product/:id",
            get(api_get).put(api_update).delete(api_delete),
        )
        .with_state(state);

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_list(
    State(state): State<AppState>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward(&state, Method::GET, "/api/product", None).await
}

async fn api_create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward(&state, Method::POST, "/api/product", Some(body)).await
}

async fn api_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward(&state, Method::GET, &format!("/api/product/{}", id), None).await
}

async fn api_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward(
        &state,
        Method::PUT,
        &format!("/api/product/{}", id),
        Some(body),
    )
    .await
}

async fn api_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward(&state, Method::DELETE, &format!("/api/product/{}", id), None).await
}

/// Forwards a request to the record service, wrapping the upstream status
/// and JSON body. Bodyless replies (204 on delete) come back as `null`.
async fn forward(
    state: &AppState,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!("{}{}", state.service_url, path);
    let mut req = state.client.request(method, url);
    if let Some(body) = body {
        req = req.json(&body);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);

    Ok(Json(ProxyResponse { status, body }))
}
