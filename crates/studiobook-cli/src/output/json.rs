//! JSON output.

use serde::Serialize;
use serde_json::Value;

use studiobook_core::ClientRecord;

/// Pretty-print any serializable value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| anyhow::anyhow!("JSON error: {}", e))
}

/// A client list in the same shape as the stored blob.
pub fn clients_json(records: &[&ClientRecord]) -> anyhow::Result<String> {
    to_json(records)
}

/// One client, with the derived map embed link when there is one.
pub fn client_json(record: &ClientRecord, map_embed_url: Option<&str>) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(record)?;
    if let (Value::Object(map), Some(url)) = (&mut value, map_embed_url) {
        map.insert("mapEmbedUrl".to_string(), Value::String(url.to_string()));
    }
    to_json(&value)
}
