//! Error taxonomy for backend calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a backend request.
///
/// Three classes, mirroring what the transport can actually tell us:
/// the request never completed ([`Transport`](Self::Transport)), the backend
/// answered non-2xx ([`Status`](Self::Status), carrying the captured body
/// text), or the 2xx body did not decode ([`Decode`](Self::Decode)).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status. The body text is captured
    /// verbatim so callers can surface it.
    #[error("request failed: {status} {body}")]
    Status { status: StatusCode, body: String },

    /// A 2xx response body could not be decoded as the expected shape.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint path {path:?}: {source}")]
    Endpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
}
