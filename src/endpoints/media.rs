//! Endpoint functions of the media API

use reqwest::Method;

use crate::client::{ClientResult, Omnia};
use crate::model::media::MediaResultItem;
use crate::model::response::Response;
use crate::model::{ApiType, StreamType};

// Use built-in library
use std::collections::HashMap;

pub struct Media<'a>(pub &'a Omnia);

impl Media<'_> {
    /// Returns an item of the given stream type by its id. `parameters` are
    /// passed on as query, e.g. `additionalFields`.
    pub async fn by_id(
        &self,
        stream_type: StreamType,
        item_id: u64,
        parameters: &HashMap<&str, &str>,
    ) -> ClientResult<Response<MediaResultItem>> {
        self.0
            .call(
                Method::GET,
                stream_type,
                ApiType::Media,
                "byid",
                &[item_id.to_string()],
                parameters,
            )
            .await
    }
}
