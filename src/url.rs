//! Assembling request URLs for the different Omnia API categories.

// Use built-in library
use std::fmt::Display;

// Use internal modules
use crate::model::{ApiType, StreamType};

/// Joins `segments` with `/`, stripping leading and trailing slashes from
/// each. Segments that end up empty are left out. Nothing is percent-encoded.
pub fn build_url<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    segments
        .into_iter()
        .map(|segment| segment.to_string().trim_matches('/').to_owned())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<String>>()
        .join("/")
}

/// URL of `operation` for the given category, or `None` when the category
/// has no known URL shape.
pub fn api_url(
    base_url: &str,
    domain_id: &str,
    api_type: ApiType,
    stream_type: StreamType,
    operation: &str,
    args: &[String],
) -> Option<String> {
    let args = build_url(args);
    let stream_type = stream_type.as_str();

    let url = match api_type {
        ApiType::Media => build_url(&[base_url, domain_id, stream_type, operation, args.as_str()]),
        ApiType::Management => {
            build_url(&[base_url, domain_id, "manage", stream_type, args.as_str(), operation])
        }
        ApiType::UploadLinkManagement => {
            build_url(&[base_url, domain_id, "manage", "uploadlinks", operation])
        }
        ApiType::System => build_url(&[base_url, domain_id, "system", operation, args.as_str()]),
        ApiType::Domain => return None,
    };
    Some(url)
}
