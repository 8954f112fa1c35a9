// Use 3rd party
use log::{Level, Log, Metadata, Record};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Use built-in library
use std::fmt;
use std::sync::Arc;

// Use internal modules
use crate::auth::OmniaCredentials;
use crate::model::response::Response;
use crate::model::{ApiType, StreamType};
use crate::url::api_url;

pub const BASE_URL: &str = "https://api.nexx.cloud/v3.1/";
const LOG_TARGET: &str = "omnia::client";

// Possible errors returned from the `omnia` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    StatusCode(StatusCode),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("form encode error: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
    #[error("no url shape for api type {0}")]
    UnsupportedApiType(ApiType),
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Forwards diagnostics to the logger installed through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

// Omnia API
pub struct Omnia {
    client: Client,
    credentials: OmniaCredentials,
    base_url: String,
    logger: Arc<dyn Log>,
}

impl Omnia {
    #[must_use]
    pub fn new(credentials: OmniaCredentials, logger: Arc<dyn Log>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: BASE_URL.to_owned(),
            logger,
        }
    }

    /// Use a preconfigured transport, e.g. one built with timeouts or a proxy.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    pub fn domain_id(&self) -> &str {
        &self.credentials.domain_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic call to the Omnia API, decoding the envelope with `T` as the
    /// result shape.
    ///
    /// `parameters` are form encoded: as query string for `GET`, as request
    /// body otherwise. A remote failure reported inside a decodable envelope
    /// is returned as `Ok`; check `metadata.status` and `metadata.error_hint`.
    pub async fn call<T, P>(
        &self,
        method: Method,
        stream_type: StreamType,
        api_type: ApiType,
        operation: &str,
        args: &[String],
        parameters: &P,
    ) -> ClientResult<Response<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = api_url(
            &self.base_url,
            self.domain_id(),
            api_type,
            stream_type,
            operation,
            args,
        )
        .ok_or(ClientError::UnsupportedApiType(api_type))?;

        let request_headers = self.credentials.request_headers(operation);

        let form = serde_urlencoded::to_string(parameters)?;

        self.trace(
            Level::Debug,
            format_args!(
                "About to send {} to {} with header {:?} and params {:?}",
                method,
                url,
                request_headers.pairs(),
                form
            ),
        );

        let response = {
            let mut builder = self.client.request(method.clone(), &url);
            for (name, value) in request_headers.pairs().iter() {
                builder = builder.header(*name, *value);
            }

            // GET parameters never travel in the body
            let builder = if method == Method::GET {
                builder.query(parameters)
            } else {
                builder.form(parameters)
            };

            builder.send().await.map_err(ClientError::from)?
        };

        let status = response.status();
        let body = response.text().await?;
        self.trace(
            Level::Debug,
            format_args!("Received {} from {} ({} bytes)", status, url, body.len()),
        );

        match Self::convert_result::<Response<T>>(&body) {
            Ok(result) => Ok(result),
            Err(err) if status.is_success() => Err(err),
            Err(_) => Err(status.into()),
        }
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }

    fn trace(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = Record::builder()
            .args(args)
            .level(level)
            .target(LOG_TARGET)
            .module_path(Some(module_path!()))
            .file(Some(file!()))
            .line(Some(line!()))
            .build();
        if self.logger.enabled(record.metadata()) {
            self.logger.log(&record);
        }
    }
}

impl fmt::Debug for Omnia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Omnia")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::model::media::{ManagementResult, MediaResultItem};
    use mockito::{mock, Matcher};
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub const DOMAIN_ID: &str = "d1";
    pub const API_SECRET: &str = "s3cr3t";
    pub const SESSION_ID: &str = "session-id-1";

    #[derive(Default)]
    pub struct CapturingLogger {
        pub records: Mutex<Vec<String>>,
    }

    impl CapturingLogger {
        pub fn messages(&self) -> Vec<String> {
            self.records.lock().unwrap().clone()
        }
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.records.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    #[tokio::test]
    async fn call_builds_url_and_signs() {
        let mock = mock("GET", "/d1/videos/byid/42")
            .match_header("x-request-cid", SESSION_ID)
            .match_header("x-request-token", "e84e033f9653a928cf767dc6a4cfd8ba")
            .with_status(200)
            .with_body_from_file("tests/files/byid.json")
            .create();

        let response: Response<MediaResultItem> = client()
            .call(Method::GET, StreamType::Video, ApiType::Media, "byid", &["42".to_owned()], &HashMap::<&str, &str>::new())
            .await
            .unwrap();

        mock.assert();
        assert!(response.is_success());
        assert_eq!(response.result.unwrap().general.item_id, 42);
    }

    #[tokio::test]
    async fn call_sends_get_parameters_as_query() {
        let mock = mock("GET", "/d1/videos/byid/43")
            .match_query(Matcher::UrlEncoded("additionalFields".into(), "all".into()))
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"metadata": {"status": 200, "verb": "GET"}}"#)
            .create();

        let mut params = HashMap::new();
        params.insert("additionalFields", "all");
        let response: Response<Value> = client()
            .call(Method::GET, StreamType::Video, ApiType::Media, "byid", &["43".to_owned()], &params)
            .await
            .unwrap();

        mock.assert();
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn call_encodes_every_get_parameter_into_query() {
        let mock = mock("GET", "/d1/radio/byid/52")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("additionalFields".into(), "genre,runtime".into()),
                Matcher::UrlEncoded("cfo".into(), "my app".into()),
            ]))
            .match_header("content-type", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"metadata": {"status": 200, "verb": "GET"}}"#)
            .create();

        let mut params = HashMap::new();
        params.insert("additionalFields", "genre,runtime");
        params.insert("cfo", "my app");
        let response: Response<Value> = client()
            .call(Method::GET, StreamType::Radio, ApiType::Media, "byid", &["52".to_owned()], &params)
            .await
            .unwrap();

        mock.assert();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn call_sends_other_parameters_as_form_body() {
        let mock = mock("PUT", "/d1/manage/shows/44/update")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("title=Pilot")
            .with_status(200)
            .with_body(r#"{"metadata": {"status": 200, "verb": "PUT"}, "result": {"message": "ok"}}"#)
            .create();

        let mut params = HashMap::new();
        params.insert("title", "Pilot");
        let response: Response<Value> = client()
            .call(Method::PUT, StreamType::Show, ApiType::Management, "update", &["44".to_owned()], &params)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.result.unwrap()["message"], "ok");
    }

    #[tokio::test]
    async fn call_returns_remote_failures_as_envelopes() {
        let _mock = mock("GET", "/d1/videos/byid/404")
            .with_status(404)
            .with_body(r#"{"metadata": {"status": 404, "verb": "GET", "errorhint": "item not found"}}"#)
            .create();

        let response: Response<MediaResultItem> = client()
            .call(Method::GET, StreamType::Video, ApiType::Media, "byid", &["404".to_owned()], &HashMap::<&str, &str>::new())
            .await
            .unwrap();

        assert!(!response.is_success());
        assert_eq!(response.error_hint(), Some("item not found"));
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn call_reports_status_without_envelope() {
        let _mock = mock("GET", "/d1/videos/byid/500")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create();

        let result = client()
            .call::<Value, _>(Method::GET, StreamType::Video, ApiType::Media, "byid", &["500".to_owned()], &HashMap::<&str, &str>::new())
            .await;

        match result {
            Err(ClientError::StatusCode(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn call_rejects_envelope_without_status() {
        let _mock = mock("GET", "/d1/videos/byid/45")
            .with_status(200)
            .with_body(r#"{"metadata": {"verb": "GET"}}"#)
            .create();

        let result = client()
            .call::<Value, _>(Method::GET, StreamType::Video, ApiType::Media, "byid", &["45".to_owned()], &HashMap::<&str, &str>::new())
            .await;

        assert!(matches!(result, Err(ClientError::ParseJSON(_))));
    }

    #[tokio::test]
    async fn call_rejects_non_json_body() {
        let _mock = mock("GET", "/d1/videos/byid/46")
            .with_status(200)
            .with_body("not json")
            .create();

        let result = client()
            .call::<Value, _>(Method::GET, StreamType::Video, ApiType::Media, "byid", &["46".to_owned()], &HashMap::<&str, &str>::new())
            .await;

        assert!(matches!(result, Err(ClientError::ParseJSON(_))));
    }

    #[tokio::test]
    async fn call_rejects_domain_api_type() {
        let result = client()
            .call::<Value, _>(Method::GET, StreamType::All, ApiType::Domain, "publicinfo", &[], &HashMap::<&str, &str>::new())
            .await;

        assert!(matches!(result, Err(ClientError::UnsupportedApiType(ApiType::Domain))));
    }

    #[tokio::test]
    async fn call_traces_without_secret() {
        let _mock = mock_request_success(
            "GET",
            "/d1/videos/byid/47",
            r#"{"metadata": {"status": 200, "verb": "GET"}}"#,
        );

        let logger = Arc::new(CapturingLogger::default());
        let omnia = Omnia::new(credentials(), logger.clone()).with_base_url(&mockito::server_url());
        let _response: Response<Value> = omnia
            .call(Method::GET, StreamType::Video, ApiType::Media, "byid", &["47".to_owned()], &HashMap::<&str, &str>::new())
            .await
            .unwrap();

        let messages = logger.messages();
        assert!(messages[0].starts_with("About to send GET to "));
        assert!(messages[0].contains("/d1/videos/byid/47"));
        assert!(messages[0].contains("e84e033f9653a928cf767dc6a4cfd8ba"));
        assert!(messages[0].contains(SESSION_ID));
        assert!(messages.iter().all(|message| !message.contains(API_SECRET)));
    }

    #[tokio::test]
    async fn call_decodes_typed_management_result() {
        let _mock = mock_request_success(
            "PUT",
            "/d1/manage/radio/49/update",
            r#"{"metadata": {"status": 200, "verb": "PUT"}, "result": {"message": "item updated"}}"#,
        );

        let mut params = HashMap::new();
        params.insert("subtitle", "Late night");
        let response: Response<ManagementResult> = client()
            .call(Method::PUT, StreamType::Radio, ApiType::Management, "update", &["49".to_owned()], &params)
            .await
            .unwrap();

        assert_eq!(response.result.unwrap().message, "item updated");
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_client() {
        let _first = mock_request_success("GET", "/d1/live/byid/50", r#"{"metadata": {"status": 200, "verb": "GET"}}"#);
        let _second = mock_request_success("GET", "/d1/live/byid/51", r#"{"metadata": {"status": 200, "verb": "GET"}}"#);

        let omnia = Arc::new(client());
        let handles: Vec<_> = vec![50u64, 51]
            .into_iter()
            .map(|id| {
                let omnia = Arc::clone(&omnia);
                tokio::spawn(async move {
                    omnia
                        .call::<Value, _>(Method::GET, StreamType::Live, ApiType::Media, "byid", &[id.to_string()], &HashMap::<&str, &str>::new())
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_success());
        }
    }

    #[test]
    fn debug_hides_secret() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains(API_SECRET));
    }

    #[test]
    fn default_base_url() {
        let omnia = Omnia::new(credentials(), Arc::new(GlobalLogger));
        assert_eq!(omnia.base_url(), "https://api.nexx.cloud/v3.1/");
        assert_eq!(omnia.domain_id(), DOMAIN_ID);
    }

    pub fn mock_request_success(method: &str, path: &str, body: &str) -> mockito::Mock {
        mock(method, path)
            .with_status(200)
            .with_body(body)
            .create()
    }

    pub fn mock_request_success_from_file(method: &str, path: &str, file_path: &str) -> mockito::Mock {
        mock(method, path)
            .with_status(200)
            .with_body_from_file(file_path)
            .create()
    }

    pub fn client() -> Omnia {
        Omnia::new(credentials(), Arc::new(CapturingLogger::default()))
            .with_base_url(&mockito::server_url())
    }

    pub fn credentials() -> OmniaCredentials {
        OmniaCredentials::new(DOMAIN_ID, API_SECRET, SESSION_ID)
    }
}
