use crate::domain::value::Token;

#[derive(Debug, Clone, PartialEq)]
/// Decoded `auth` response.
///
/// The token is optional at the wire level; the client turns its absence into
/// an error.
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded `senders` response.
pub struct SendersResponse {
    pub success: bool,
    pub message: Option<String>,
    pub senders: Vec<Sender>,
}

#[derive(Debug, Clone, PartialEq)]
/// An approved sending identity, as owned by the provider.
///
/// The client only reads these records. Timestamps are carried as the opaque
/// strings the API returns.
pub struct Sender {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub tracker: Option<Tracker>,
    pub status: Option<String>,
    pub active: bool,
    pub user: Option<String>,
    pub created_on: Option<String>,
    pub last_modified_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Approval tracker attached to a [`Sender`].
pub struct Tracker {
    pub id: String,
    pub title: String,
    pub auto_approve: bool,
    pub status: Option<String>,
    pub active: bool,
    pub created_on: Option<String>,
    pub last_modified_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded response for `sms/contacts` and `sms/channel`.
pub struct SendSmsResponse {
    pub success: bool,
    pub message: Option<String>,
    /// Opaque payload the provider reserves; empty object today.
    pub payload: serde_json::Value,
}
