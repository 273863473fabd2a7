use serde::Deserialize;

use crate::domain::{Sender, SendersResponse, Tracker};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendersJsonResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    payload: Option<SendersJsonPayload>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendersJsonPayload {
    #[serde(default)]
    data: Vec<SenderJson>,
}

// The provider serializes ids as `_id` and timestamps in camelCase.
#[derive(Debug, Clone, Deserialize)]
struct SenderJson {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tracker: Option<TrackerJson>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    user: Option<String>,
    #[serde(rename = "createdOn", default)]
    created_on: Option<String>,
    #[serde(rename = "lastModifiedOn", default)]
    last_modified_on: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackerJson {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(rename = "autoApprove", default)]
    auto_approve: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    active: bool,
    #[serde(rename = "createdOn", default)]
    created_on: Option<String>,
    #[serde(rename = "lastModifiedOn", default)]
    last_modified_on: Option<String>,
}

impl From<SenderJson> for Sender {
    fn from(value: SenderJson) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            tracker: value.tracker.map(Tracker::from),
            status: value.status,
            active: value.active,
            user: value.user,
            created_on: value.created_on,
            last_modified_on: value.last_modified_on,
        }
    }
}

impl From<TrackerJson> for Tracker {
    fn from(value: TrackerJson) -> Self {
        Self {
            id: value.id,
            title: value.title,
            auto_approve: value.auto_approve,
            status: value.status,
            active: value.active,
            created_on: value.created_on,
            last_modified_on: value.last_modified_on,
        }
    }
}

pub fn decode_senders_json_response(json: &str) -> Result<SendersResponse, TransportError> {
    let parsed: SendersJsonResponse = serde_json::from_str(json)?;
    Ok(SendersResponse {
        success: parsed.success,
        message: parsed.message,
        senders: parsed
            .payload
            .map(|payload| payload.data.into_iter().map(Sender::from).collect())
            .unwrap_or_default(),
    })
}
