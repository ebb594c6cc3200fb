//! Error types for the news API client and the router.
//!
//! # Design
//! The client never interprets a failure: a transport problem and a non-2xx
//! status are surfaced as-is so the caller decides what to show. 4xx and 5xx
//! share one variant carrying the raw status and body.

use thiserror::Error;

/// Errors returned while building requests or parsing responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A path parameter was empty, which would address a different endpoint.
    #[error("path parameter `{name}` must not be empty")]
    EmptySegment { name: &'static str },

    /// A path parameter was `.` or `..`, which URL parsers resolve as a path
    /// step instead of sending it as data.
    #[error("path parameter `{name}` must not be `.` or `..`")]
    DotSegment { name: &'static str },

    /// The request never produced a response (host unreachable, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Status code of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised when validating a route table or building a location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route table is empty")]
    EmptyTable,

    #[error("route table must end with a catch-all entry")]
    MissingCatchAll,

    #[error("catch-all route `{name}` must be the last entry")]
    CatchAllNotLast { name: String },

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
}
