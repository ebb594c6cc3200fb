//! I/O-free core of the news browser: API request building and routing.
//!
//! # Overview
//! `NewsClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `RouteTable` maps a
//! hash location to the view that should render it.
//!
//! # Design
//! - `NewsClient` is stateless: it holds only `base_url`, injected at
//!   construction.
//! - All five queries share one URL builder; path parameters are
//!   percent-encoded as single segments.
//! - Response bodies are opaque JSON; views interpret them.
//! - A route table is validated once and must end with a catch-all.

pub mod client;
pub mod error;
pub mod http;
pub mod router;
pub mod types;

pub use client::NewsClient;
pub use error::{ApiError, RouteError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::{Resolved, RouteEntry, RouteTable, View};
pub use types::{Endpoint, Payload};
