// Use 3rd party
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Use local
use crate::model::Bool;

/// General information about a media item.
///
/// Some fields (genre, runtime, ...) are "additional" fields in Omnia terms;
/// they are only filled in when requested via the `additionalFields` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaResultGeneral {
    #[serde(rename = "ID")]
    pub item_id: u64,
    #[serde(rename = "GID")]
    pub gid: u64,
    #[serde(rename = "hash")]
    pub hash_value: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "contentModerationAspects")]
    pub content_moderation_aspects: String,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(rename = "audiotype", default, skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(rename = "isPicked", default, skip_serializing_if = "Option::is_none")]
    pub is_picked: Option<Bool>,
    #[serde(rename = "forKids", default, skip_serializing_if = "Option::is_none")]
    pub for_kids: Option<Bool>,
    #[serde(rename = "isPay")]
    pub is_pay: Bool,
    #[serde(rename = "isUGC", default, skip_serializing_if = "Option::is_none")]
    pub is_ugc: Option<Bool>,
}

/// A single media item as returned by `byid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaResultItem {
    pub general: MediaResultGeneral,
    /// Not modelled, kept as returned.
    #[serde(rename = "imagedata", default, skip_serializing_if = "Value::is_null")]
    pub image_data: Value,
}

/// List-shaped media results, e.g. from `allmedia` listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaResult(pub Vec<MediaResultItem>);

impl MediaResult {
    pub fn items(&self) -> &[MediaResultItem] {
        &self.0
    }

    pub fn into_items(self) -> Vec<MediaResultItem> {
        self.0
    }
}

/// Reply of management operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementResult {
    pub message: String,
}
