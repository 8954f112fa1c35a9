//! Endpoint functions of the system API

use reqwest::Method;

use crate::client::{ClientResult, Omnia};
use crate::model::attributes::EditableAttributesResponse;
use crate::model::response::Response;
use crate::model::{ApiType, StreamType};

pub struct System<'a>(pub &'a Omnia);

impl System<'_> {
    /// Lists the attributes that may be updated for items of `stream_type`.
    pub async fn editable_attributes(
        &self,
        stream_type: StreamType,
    ) -> ClientResult<Response<EditableAttributesResponse>> {
        self.0
            .call(
                Method::GET,
                stream_type,
                ApiType::System,
                "editableattributesfor",
                &[stream_type.to_string()],
                &[] as &[(&str, &str)],
            )
            .await
    }
}
