use crate::domain::validation::ValidationError;
use crate::domain::value::{ChannelId, ContactNumber, MessageText, Password, SenderId, Username};

#[derive(Debug, Clone)]
/// Account credentials presented to the `auth` endpoint.
///
/// Validation happens once, here, in the order the provider checks locally:
/// empty username, then empty password, then the username phone pattern.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated [`Credentials`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Username::FIELD,
            });
        }
        let password = Password::new(password)?;
        let username = Username::parse(username)?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone)]
/// A message-send request, routed by recipient kind.
pub enum SendSms {
    ToContacts(ToContacts),
    ToChannel(ToChannel),
}

#[derive(Debug, Clone)]
/// Send a message to an explicit list of contacts.
pub struct ToContacts {
    sender_id: SenderId,
    message: MessageText,
    contacts: Vec<ContactNumber>,
}

#[derive(Debug, Clone)]
/// Send a message to a named broadcast channel.
pub struct ToChannel {
    sender_id: SenderId,
    message: MessageText,
    channel: ChannelId,
}

impl SendSms {
    /// Build a [`SendSms::ToContacts`] request.
    ///
    /// The contacts list must not be empty; each entry is already validated as
    /// a [`ContactNumber`].
    pub fn to_contacts(
        sender_id: SenderId,
        message: MessageText,
        contacts: Vec<ContactNumber>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::ToContacts(ToContacts::new(
            sender_id, message, contacts,
        )?))
    }

    /// Build a [`SendSms::ToChannel`] request.
    pub fn to_channel(sender_id: SenderId, message: MessageText, channel: ChannelId) -> Self {
        Self::ToChannel(ToChannel::new(sender_id, message, channel))
    }

    pub fn sender_id(&self) -> &SenderId {
        match self {
            Self::ToContacts(request) => request.sender_id(),
            Self::ToChannel(request) => request.sender_id(),
        }
    }

    pub fn message(&self) -> &MessageText {
        match self {
            Self::ToContacts(request) => request.message(),
            Self::ToChannel(request) => request.message(),
        }
    }
}

impl ToContacts {
    /// Create a validated contact-list request.
    pub fn new(
        sender_id: SenderId,
        message: MessageText,
        contacts: Vec<ContactNumber>,
    ) -> Result<Self, ValidationError> {
        if contacts.is_empty() {
            return Err(ValidationError::Empty {
                field: ContactNumber::FIELD,
            });
        }
        Ok(Self {
            sender_id,
            message,
            contacts,
        })
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn contacts(&self) -> &[ContactNumber] {
        &self.contacts
    }
}

impl ToChannel {
    /// Create a channel request; the components are already validated.
    pub fn new(sender_id: SenderId, message: MessageText, channel: ChannelId) -> Self {
        Self {
            sender_id,
            message,
            channel,
        }
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }
}
