//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod authenticate;
mod send_sms;
mod senders;

pub use authenticate::{decode_authenticate_json_response, encode_authenticate_body};
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_body};
pub use senders::decode_senders_json_response;
