// Use 3rd party
use serde::{Deserialize, Serialize};

/// The envelope every Omnia call answers with, see
/// https://api.docs.nexx.cloud/api-design/response-object.
///
/// `metadata` is always there, even when the call failed on the remote side.
/// `result` and `paging` stay `None` when the call shape has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub metadata: ResponseMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<ResponsePaging>,
}

impl<T> Response<T> {
    /// Whether Omnia reported the call as successful in `metadata.status`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.metadata.status)
    }

    pub fn error_hint(&self) -> Option<&str> {
        self.metadata.error_hint.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// The HTTP status of the call.
    pub status: u16,
    #[serde(rename = "apiversion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// The HTTP verb used.
    pub verb: String,
    /// Internal duration needed to create the response.
    #[serde(rename = "processingtime", default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    /// The called endpoint and parameters.
    #[serde(rename = "calledwith", default, skip_serializing_if = "Option::is_none")]
    pub called_with: Option<String>,
    /// The `cfo` parameter of the call.
    #[serde(rename = "calledfor", default, skip_serializing_if = "Option::is_none")]
    pub called_for: Option<String>,
    #[serde(rename = "fordomain", default, skip_serializing_if = "Option::is_none")]
    pub for_domain: Option<u64>,
    #[serde(rename = "fromstage", default, skip_serializing_if = "Option::is_none")]
    pub from_stage: Option<u8>,
    /// Set when the call used deprecated functionality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Set when the call failed.
    #[serde(rename = "errorhint", default, skip_serializing_if = "Option::is_none")]
    pub error_hint: Option<String>,
    #[serde(rename = "fromcache", default, skip_serializing_if = "Option::is_none")]
    pub from_cache: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePaging {
    pub start: u64,
    pub limit: u64,
    #[serde(rename = "resultcount")]
    pub result_count: u64,
}
