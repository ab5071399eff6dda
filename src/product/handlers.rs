use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use super::types::{parse_record, ErrorResponse, ProductRecord};
use crate::store::SharedStore;

type ApiResult<T> = Result<(StatusCode, Json<T>), (StatusCode, Json<ErrorResponse>)>;

/// `GET /api/product` — every live record, in id order.
pub async fn handle_list_products(
    Extension(store): Extension<SharedStore>,
) -> Json<Vec<ProductRecord>> {
    Json(store.read().list())
}

/// `GET /api/product/:productId` — the record, or `null` when the id is
/// out of range or its slot is absent. An absent record is not an error.
/// Non-numeric ids are rejected by path deserialization before we get here.
pub async fn handle_get_product(
    Path(product_id): Path<i64>,
    Extension(store): Extension<SharedStore>,
) -> Json<Option<ProductRecord>> {
    Json(store.read().get(product_id).cloned())
}

/// `POST /api/product` — validates the payload and stores it under the
/// smallest free id (the payload's own id is ignored).
pub async fn handle_create_product(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<Value>,
) -> ApiResult<ProductRecord> {
    let record = match parse_record(&body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Rejected create: {}", e);
            return Err(bad_request(e.to_string()));
        }
    };

    let stored = store.write().insert(record);
    tracing::debug!("Created product {}", stored.product_id);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `PUT /api/product/:productId` — validates the payload and stores it at
/// exactly the addressed id, backfilling skipped ids as free slots when the
/// id lies beyond the current table.
pub async fn handle_update_product(
    Path(product_id): Path<i64>,
    Extension(store): Extension<SharedStore>,
    Json(body): Json<Value>,
) -> ApiResult<ProductRecord> {
    let record = match parse_record(&body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Rejected update for id {}: {}", product_id, e);
            return Err(bad_request(e.to_string()));
        }
    };

    match store.write().put(product_id, record) {
        Ok(stored) => {
            tracing::debug!("Stored product {}", stored.product_id);
            Ok((StatusCode::CREATED, Json(stored)))
        }
        Err(e) => {
            tracing::warn!("Rejected update: {}", e);
            Err(bad_request(e.to_string()))
        }
    }
}

/// `DELETE /api/product/:productId` — 204 when a record was deleted, 200
/// when there was nothing to delete. Idempotent.
pub async fn handle_delete_product(
    Path(product_id): Path<i64>,
    Extension(store): Extension<SharedStore>,
) -> StatusCode {
    if store.write().remove(product_id) {
        tracing::debug!("Deleted product {}", product_id);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    }
}

/// `GET /api/hello` — health check.
pub async fn handle_hello() -> &'static str {
    "Hello world!"
}

fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}
