use serde::Serialize;

use crate::domain::hash::command_hash;

/// One start or stop command as it goes over the wire. Built once per
/// invocation and never mutated afterwards; absent optional fields are
/// omitted from the JSON body entirely, not serialized as null.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargeCommand {
    pub cpid: String,
    pub connector_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_tag: Option<String>,
    pub timestamp: String,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i64>,
}

impl ChargeCommand {
    /// Start command. The id tag always ends up in the body, falling back to
    /// the configured default when the caller supplied none; the transaction
    /// id is carried only when supplied but still enters the hash input as
    /// its placeholder otherwise.
    pub fn start(
        cpid: String,
        connector_id: u32,
        id_tag: Option<String>,
        transaction_id: Option<i64>,
        default_id_tag: &str,
        timestamp: String,
    ) -> Self {
        let id_tag = id_tag.unwrap_or_else(|| default_id_tag.to_string());
        let hash = command_hash(
            &cpid,
            connector_id,
            Some(&id_tag),
            transaction_id,
            &timestamp,
        );

        Self {
            cpid,
            connector_id,
            id_tag: Some(id_tag),
            timestamp,
            hash,
            transaction_id,
        }
    }

    /// Stop command. Both identifiers are optional and independently affect
    /// the body (include-if-present) and the hash input
    /// (placeholder-if-absent).
    pub fn stop(
        cpid: String,
        connector_id: u32,
        id_tag: Option<String>,
        transaction_id: Option<i64>,
        timestamp: String,
    ) -> Self {
        let hash = command_hash(
            &cpid,
            connector_id,
            id_tag.as_deref(),
            transaction_id,
            &timestamp,
        );

        Self {
            cpid,
            connector_id,
            id_tag,
            timestamp,
            hash,
            transaction_id,
        }
    }

    /// A stop carrying neither identifier cannot address a specific session,
    /// which is what makes the 404-triggered connector release legitimate.
    pub fn fallback_eligible(&self) -> bool {
        self.id_tag.is_none() && self.transaction_id.is_none()
    }
}

/// Minimal forced-release request. No timestamp, no hash; the controller
/// frees the connector regardless of which session held it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCommand {
    pub cpid: String,
    pub connector_id: u32,
}

impl ReleaseCommand {
    pub fn for_connector(command: &ChargeCommand) -> Self {
        Self {
            cpid: command.cpid.clone(),
            connector_id: command.connector_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::hash::command_hash;

    use super::{ChargeCommand, ReleaseCommand};

    const TIMESTAMP: &str = "2026-01-02T03:04:05Z";
    const DEFAULT_ID_TAG: &str = "DEMO_IDTAG";

    fn json_of(command: &ChargeCommand) -> serde_json::Value {
        serde_json::to_value(command).expect("command should serialize")
    }

    #[test]
    fn start_defaults_id_tag_and_omits_transaction_id() {
        let command = ChargeCommand::start(
            "CP_1".to_string(),
            1,
            None,
            None,
            DEFAULT_ID_TAG,
            TIMESTAMP.to_string(),
        );
        let json = json_of(&command);

        assert_eq!(json["cpid"], "CP_1");
        assert_eq!(json["connectorId"], 1);
        assert_eq!(json["idTag"], "DEMO_IDTAG");
        assert_eq!(json["timestamp"], TIMESTAMP);
        assert!(json.get("transactionId").is_none());
        assert_eq!(
            json["hash"],
            command_hash("CP_1", 1, Some("DEMO_IDTAG"), None, TIMESTAMP).as_str()
        );
    }

    #[test]
    fn start_keeps_supplied_id_tag_and_transaction_id() {
        let command = ChargeCommand::start(
            "CP_1".to_string(),
            1,
            Some("TAG_A".to_string()),
            Some(5),
            DEFAULT_ID_TAG,
            TIMESTAMP.to_string(),
        );
        let json = json_of(&command);

        assert_eq!(json["idTag"], "TAG_A");
        assert_eq!(json["transactionId"], 5);
        assert_eq!(
            json["hash"],
            command_hash("CP_1", 1, Some("TAG_A"), Some(5), TIMESTAMP).as_str()
        );
    }

    #[test]
    fn stop_omits_both_identifiers_but_hashes_placeholders() {
        let command =
            ChargeCommand::stop("CP_1".to_string(), 1, None, None, TIMESTAMP.to_string());
        let json = json_of(&command);

        assert!(json.get("idTag").is_none());
        assert!(json.get("transactionId").is_none());
        assert_eq!(
            json["hash"],
            command_hash("CP_1", 1, None, None, TIMESTAMP).as_str()
        );
        assert!(command.fallback_eligible());
    }

    #[test]
    fn stop_identifiers_are_independent() {
        let tag_only = ChargeCommand::stop(
            "CP_1".to_string(),
            1,
            Some("TAG_A".to_string()),
            None,
            TIMESTAMP.to_string(),
        );
        let json = json_of(&tag_only);
        assert_eq!(json["idTag"], "TAG_A");
        assert!(json.get("transactionId").is_none());
        assert!(!tag_only.fallback_eligible());

        let tx_only =
            ChargeCommand::stop("CP_1".to_string(), 1, None, Some(5), TIMESTAMP.to_string());
        let json = json_of(&tx_only);
        assert!(json.get("idTag").is_none());
        assert_eq!(json["transactionId"], 5);
        assert!(!tx_only.fallback_eligible());
        assert_eq!(
            json["hash"],
            command_hash("CP_1", 1, None, Some(5), TIMESTAMP).as_str()
        );
    }

    #[test]
    fn release_carries_only_station_and_connector() {
        let stop = ChargeCommand::stop("CP_7".to_string(), 2, None, None, TIMESTAMP.to_string());
        let release = ReleaseCommand::for_connector(&stop);

        assert_eq!(
            serde_json::to_string(&release).expect("release should serialize"),
            r#"{"cpid":"CP_7","connectorId":2}"#
        );
    }
}
