use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::product::types::ProductRecord;

/// Reads the seed file into a list of records.
///
/// This is the only file I/O the service performs. It happens once, before
/// the server starts; any failure here is fatal to startup.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<ProductRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let records: Vec<ProductRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    Ok(records)
}
