use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{ChannelId, ContactNumber, MessageText, SendSms, SendSmsResponse, SenderId};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    payload: Value,
}

pub fn encode_send_sms_body(request: &SendSms) -> Value {
    let mut body = Map::new();
    body.insert(
        SenderId::FIELD.to_owned(),
        Value::String(request.sender_id().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(request.message().as_str().to_owned()),
    );

    match request {
        SendSms::ToContacts(to_contacts) => {
            let contacts = to_contacts
                .contacts()
                .iter()
                .map(|contact| Value::String(contact.raw().to_owned()))
                .collect();
            body.insert(ContactNumber::FIELD.to_owned(), Value::Array(contacts));
        }
        SendSms::ToChannel(to_channel) => {
            body.insert(
                ChannelId::FIELD.to_owned(),
                Value::String(to_channel.channel().as_str().to_owned()),
            );
        }
    }

    Value::Object(body)
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        success: parsed.success,
        message: parsed.message,
        payload: parsed.payload,
    })
}
