use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error returned from the Cloud Resource Manager service.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// An error from the HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),

    /// The response body did not match the expected message.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An error from a token source.
    #[error("token source failed: {0}")]
    TokenSource(Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

/// An error response returned from Cloud Resource Manager.
///
/// See the [`API errors`][1] documentation for more details.
///
/// [1]: https://cloud.google.com/apis/design/errors
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// Example values include: `400` (Bad Request), `403` (Forbidden), and `409` (Conflict).
    pub code: u16,

    /// Description of the error.
    pub message: String,

    /// The canonical error code, e.g. `PERMISSION_DENIED` or `ABORTED`.
    #[serde(default)]
    pub status: Option<String>,
}

impl ErrorResponse {
    /// Returns `true` when the policy was modified concurrently, i.e. the `etag` sent with
    /// `setIamPolicy` no longer matched.
    pub fn is_conflict(&self) -> bool {
        self.code == 409 || self.status.as_deref() == Some("ABORTED")
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for ErrorResponse {}

/// The error JSON format contains an extra object level that is inconvenient to include in our
/// error.
#[derive(serde::Deserialize)]
pub(crate) struct ErrorWrapper {
    pub(crate) error: ErrorResponse,
}
