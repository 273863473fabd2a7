use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{AuthResponse, Credentials, Password, Token, Username};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct AuthJsonResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    payload: Option<AuthJsonPayload>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthJsonPayload {
    #[serde(default)]
    token: Option<String>,
}

pub fn encode_authenticate_body(credentials: &Credentials) -> Value {
    let mut body = Map::new();
    body.insert(
        Username::FIELD.to_owned(),
        Value::String(credentials.username().as_str().to_owned()),
    );
    body.insert(
        Password::FIELD.to_owned(),
        Value::String(credentials.password().as_str().to_owned()),
    );
    Value::Object(body)
}

pub fn decode_authenticate_json_response(json: &str) -> Result<AuthResponse, TransportError> {
    let parsed: AuthJsonResponse = serde_json::from_str(json)?;
    // A blank token is treated as absent.
    let token = parsed
        .payload
        .and_then(|payload| payload.token)
        .and_then(|token| Token::new(token).ok());
    Ok(AuthResponse {
        success: parsed.success,
        message: parsed.message,
        token,
    })
}
