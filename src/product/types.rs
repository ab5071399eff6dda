use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A product entry with team metadata, keyed by `productId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: i64,
    pub product_name: String,
    pub product_owner_name: String,
    pub developers: Vec<String>,
    pub scrum_master_name: String,
    /// `YYYY/MM/DD`, by convention. Not validated beyond being a string.
    pub start_date: String,
    /// `"Agile"` or `"Waterfall"`, by convention. Not enforced server-side.
    pub methodology: String,
}

/// Error body for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A payload field that is missing or has the wrong primitive shape.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing or invalid field `{0}`")]
pub struct InvalidField(pub &'static str);

/// Validates a create/update payload and lifts it into a [`ProductRecord`].
///
/// The payload must carry all seven fields with exact primitive shapes:
/// `productId` a number, `developers` a non-empty array of strings, the rest
/// strings. The first offending field fails the whole payload. Extra fields
/// are ignored. The payload's `productId` value is carried through but
/// callers always overwrite it with the allocated or addressed id.
pub fn parse_record(body: &Value) -> Result<ProductRecord, InvalidField> {
    let obj = body.as_object().ok_or(InvalidField("body"))?;

    let product_id = match obj.get("productId") {
        Some(v) if v.is_number() => v.as_i64().unwrap_or(-1),
        _ => return Err(InvalidField("productId")),
    };
    let product_name = string_field(obj, "productName")?;
    let product_owner_name = string_field(obj, "productOwnerName")?;

    let developers = obj
        .get("developers")
        .and_then(Value::as_array)
        .ok_or(InvalidField("developers"))?;
    if developers.is_empty() {
        return Err(InvalidField("developers"));
    }
    let developers = developers
        .iter()
        .map(|d| {
            d.as_str()
                .map(str::to_string)
                .ok_or(InvalidField("developers"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let scrum_master_name = string_field(obj, "scrumMasterName")?;
    let start_date = string_field(obj, "startDate")?;
    let methodology = string_field(obj, "methodology")?;

    Ok(ProductRecord {
        product_id,
        product_name,
        product_owner_name,
        developers,
        scrum_master_name,
        start_date,
        methodology,
    })
}

fn string_field(obj: &Map<String, Value>, name: &'static str) -> Result<String, InvalidField> {
    obj.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(InvalidField(name))
}
