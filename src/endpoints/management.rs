//! Endpoint functions of the management API

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::{ClientResult, Omnia};
use crate::model::response::Response;
use crate::model::{ApiType, Bool, StreamType};

// Use built-in library
use std::collections::HashMap;

/// Form sent by `fromurl`. `filename` is left out entirely when unset or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadByUrl<'a> {
    pub url: &'a str,
    pub use_queue: Bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<&'a str>,
}

impl<'a> UploadByUrl<'a> {
    pub fn new(url: &'a str, use_queue: bool, filename: Option<&'a str>) -> Self {
        Self {
            url,
            use_queue: use_queue.into(),
            filename: filename.filter(|name| !name.is_empty()),
        }
    }
}

pub struct Management<'a>(pub &'a Omnia);

impl Management<'_> {
    /// Updates the general metadata of a media item.
    pub async fn update(
        &self,
        stream_type: StreamType,
        item_id: u64,
        parameters: &HashMap<&str, &str>,
    ) -> ClientResult<Response<Value>> {
        self.0
            .call(
                Method::PUT,
                stream_type,
                ApiType::Management,
                "update",
                &[item_id.to_string()],
                parameters,
            )
            .await
    }

    /// Creates a new media item of the given stream type from a source url.
    pub async fn upload_by_url(
        &self,
        stream_type: StreamType,
        url: &str,
        use_queue: bool,
        filename: Option<&str>,
    ) -> ClientResult<Response<Value>> {
        let form = UploadByUrl::new(url, use_queue, filename);
        self.0
            .call(
                Method::POST,
                stream_type,
                ApiType::Management,
                "fromurl",
                &[],
                &form,
            )
            .await
    }
}
