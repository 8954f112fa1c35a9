pub mod attributes;
pub mod media;
pub mod response;

// Use 3rd party
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// Use built-in library
use std::fmt;

/// Category of media item a call concerns. The wire value is the path
/// segment Omnia expects, e.g. `videos` for [`StreamType::Video`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamType {
    #[serde(rename = "allmedia")]
    All,
    #[serde(rename = "videos")]
    Video,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "shows")]
    Show,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "live")]
    Live,
}

impl StreamType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "allmedia",
            Self::Video => "videos",
            Self::Audio => "audio",
            Self::Show => "shows",
            Self::Radio => "radio",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the URL shape and auth context of a call. Never sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiType {
    Media,
    Management,
    UploadLinkManagement,
    System,
    Domain,
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Media => "media",
            Self::Management => "management",
            Self::UploadLinkManagement => "upload_link_management",
            Self::System => "system",
            Self::Domain => "domain",
        };
        f.write_str(name)
    }
}

/// Omnia expresses booleans as `0` and `1`. Wrapped in an `Option` this keeps
/// "present and false" apart from "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bool {
    False = 0,
    True = 1,
}

impl Bool {
    pub const fn to_bool(self) -> bool {
        matches!(self, Self::True)
    }

    pub const fn as_int(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.to_bool()
    }
}

impl Serialize for Bool {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u8(self.as_int())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(d)? {
            0 => Ok(Self::False),
            1 => Ok(Self::True),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(u64::from(other)),
                &"0 or 1",
            )),
        }
    }
}
