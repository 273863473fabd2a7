//! Typed Rust client for the Notify SMS HTTP API.
//!
//! The design is layered: a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! Construction authenticates once; the bearer token is reused for the
//! client's lifetime.
//!
//! ```rust,no_run
//! use notify_sms::{ContactNumber, Credentials, MessageText, NotifySmsClient, SenderId, ToContacts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notify_sms::NotifyError> {
//!     let credentials = Credentials::new("260978613411", "...")?;
//!     let client = NotifySmsClient::connect(credentials).await?;
//!
//!     let senders = client.get_senders().await?;
//!     let sender = SenderId::new(senders.senders[0].id.as_str())?;
//!
//!     let request = ToContacts::new(
//!         sender,
//!         MessageText::new("hello")?,
//!         vec![ContactNumber::new("+260978619511")?],
//!     )?;
//!     let _resp = client.send_to_contacts(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{NotifyError, NotifySmsClient, NotifySmsClientBuilder};
pub use domain::{
    AuthResponse, ChannelId, ContactNumber, Credentials, MessageText, Password, SendSms,
    SendSmsResponse, Sender, SenderId, SendersResponse, ToChannel, ToContacts, Token, Tracker,
    Username, ValidationError,
};
