//! Omnia is a wrapper for the nexxOMNIA media management API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! omnia = "0.1.0"
//! ```
//!
//! Omnia uses asynchronous programming with `async` and `await`. Every call
//! performs exactly one request, there are no retries and no caching.
//!
//! ## Authorization
//!
//! Each request is signed with your domain id and API secret, and carries
//! the session id of your application. All three can be found in the
//! nexxOMNIA dashboard. `OmniaCredentials::from_env` reads them from
//! `OMNIA_DOMAIN_ID`, `OMNIA_API_SECRET` and `OMNIA_SESSION_ID`.
//!
//! ## Responses
//!
//! Every call returns a `Response<T>` as long as the body could be decoded.
//! Omnia reports failures inside the envelope, so check
//! `response.is_success()` and `response.error_hint()`.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! omnia = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use omnia::auth::OmniaCredentials;
//! use omnia::client::{GlobalLogger, Omnia};
//! use omnia::model::StreamType;
//! use dotenv::dotenv;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     let credentials = OmniaCredentials::from_env().unwrap();
//!
//!     // Diagnostics go through whatever logger the application installed
//!     let client = Omnia::new(credentials, Arc::new(GlobalLogger));
//!
//!     let video = client.media().by_id(StreamType::Video, 42, &HashMap::new()).await;
//!     println!("{:?}", video.unwrap());
//!
//!     let attributes = client.system().editable_attributes(StreamType::Video).await;
//!     println!("{:?}", attributes.unwrap().result);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod model;
pub mod url;
