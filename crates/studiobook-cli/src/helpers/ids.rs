use studiobook_core::{BlobStore, ClientStore};

use crate::errors::CliError;

/// Resolve a full id or a unique id prefix to a stored id.
pub fn resolve_client_id<B: BlobStore>(
    store: &ClientStore<B>,
    query: &str,
) -> anyhow::Result<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::invalid_input("Client ID must not be empty").into());
    }
    if let Some(record) = store.get(query) {
        return Ok(record.id.clone());
    }

    let matches: Vec<&str> = store
        .list()
        .iter()
        .map(|record| record.id.as_str())
        .filter(|id| id.starts_with(query))
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).to_string()),
        [] => Err(CliError::not_found(
            format!("Client not found: {}", query),
            "Hint: Run `studiobook list` to see client IDs.",
        )
        .into()),
        _ => Err(CliError::invalid_input_with_hint(
            format!("Client ID prefix '{}' matches {} clients", query, matches.len()),
            "Hint: Use more characters of the ID.",
        )
        .into()),
    }
}
