//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Credentials, SendSms, ToChannel, ToContacts};
pub use response::{AuthResponse, SendSmsResponse, Sender, SendersResponse, Tracker};
pub use validation::ValidationError;
pub use value::{ChannelId, ContactNumber, MessageText, Password, SenderId, Token, Username};
