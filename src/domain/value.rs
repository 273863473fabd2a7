use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Country calling code the Notify API accepts account numbers under.
const USERNAME_COUNTRY_CODE: &str = "260";
/// Number of national digits expected after the country code.
const USERNAME_NATIONAL_DIGITS: usize = 9;

#[derive(Debug, Clone)]
/// Account username: a Zambian mobile number in international form.
///
/// Invariant: non-empty after trimming, and matching the provider's acceptance
/// pattern — an optional `+`, the `260` country code, then exactly nine
/// digits. The raw (trimmed) value is preserved and is what gets sent to the
/// API; an E.164 normalization is kept alongside it.
///
/// Equality and hashing are based on the E.164 form, so `260978613411` and
/// `+260978613411` compare equal.
pub struct Username {
    raw: String,
    e164: String,
}

impl Username {
    /// JSON field name used by the Notify API (`username`).
    pub const FIELD: &'static str = "username";

    /// Parse and validate an account username.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let digits = raw.strip_prefix('+').unwrap_or(&raw);
        let national = digits.strip_prefix(USERNAME_COUNTRY_CODE);
        let matches_pattern = matches!(
            national,
            Some(rest)
                if rest.len() == USERNAME_NATIONAL_DIGITS
                    && rest.bytes().all(|b| b.is_ascii_digit())
        );
        if !matches_pattern {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let international = if raw.starts_with('+') {
            raw.clone()
        } else {
            format!("+{raw}")
        };
        let parsed = phonenumber::parse(Some(country::Id::ZM), &international)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming, as sent to the Notify API.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for Username {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for Username {}

impl std::hash::Hash for Username {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// JSON field name used by the Notify API (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Opaque bearer token returned by `auth` and attached to every authorized
/// request.
///
/// Invariant: non-empty after trimming.
pub struct Token(String);

impl Token {
    /// JSON field name used by the Notify API (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of an approved sending identity (`sender_id`).
///
/// Invariant: non-empty after trimming. The value must reference a sender
/// approved for your account; see `get_senders`.
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by the Notify API (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the Notify API (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to the Notify API (`contacts` entries).
///
/// Invariant: non-empty after trimming. This type does not normalize; the
/// provider owns the recipient-number contract.
pub struct ContactNumber(String);

impl ContactNumber {
    /// JSON field name used by the Notify API (`contacts`).
    pub const FIELD: &'static str = "contacts";

    /// Create a validated (non-empty) contact number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the Notify API.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of a broadcast channel recipients subscribe to (`channel`).
///
/// Invariant: non-empty after trimming.
pub struct ChannelId(String);

impl ChannelId {
    /// JSON field name used by the Notify API (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Create a validated [`ChannelId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated channel id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
