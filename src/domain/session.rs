use serde::Deserialize;

/// Snapshot of one in-progress charging session as reported by the
/// controller. Read-only on this side; the controller owns the state.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub cpid: String,
    pub connector_id: u32,
    pub id_tag: String,
    pub transaction_id: i64,
}

/// Wire envelope of the active-sessions endpoint.
#[derive(Debug, Deserialize)]
pub struct ActiveSessionList {
    pub sessions: Vec<ActiveSession>,
}
