use sha2::{Digest, Sha256};

/// Stands in for id tag and transaction id in the canonical string when the
/// caller supplied neither; the controller recomputes the digest with the
/// same substitution.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Digest binding a command's identity to its timestamp. The canonical form
/// is `cpid|connectorId|idTag|transactionId|timestamp|-|-`, hashed with
/// SHA-256 and rendered as lowercase hex.
pub fn command_hash(
    cpid: &str,
    connector_id: u32,
    id_tag: Option<&str>,
    transaction_id: Option<i64>,
    timestamp: &str,
) -> String {
    let id_tag = id_tag.unwrap_or(FIELD_PLACEHOLDER);
    let transaction_id = transaction_id
        .map_or_else(|| FIELD_PLACEHOLDER.to_string(), |value| value.to_string());

    let canonical = format!("{cpid}|{connector_id}|{id_tag}|{transaction_id}|{timestamp}|-|-");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
